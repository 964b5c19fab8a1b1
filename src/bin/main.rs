use netsim::{
    layers::PipelineConfig,
    service::{handle_json, handle_request, Request, SimulatorNode},
};
use serde_json::Value;
use std::io::Write;
use tokio::io::{self, AsyncBufReadExt, BufReader};

mod config;

fn print_reply(reply: &Value) {
    let text = if config::PRETTY_OUTPUT {
        serde_json::to_string_pretty(reply)
    } else {
        serde_json::to_string(reply)
    };
    match text {
        Ok(text) => println!("{}", text),
        Err(e) => println!("[shell] Error: failed to print reply: {}", e),
    }
}

fn prompt() -> std::io::Result<()> {
    print!("> ");
    std::io::stdout().flush()
}

fn print_help() {
    println!("Commands:");
    println!("  add-router <name>");
    println!("  add-link <source> <target> <weight>");
    println!("  add-duplex <a> <b> <weight>");
    println!("  path <start> <end>");
    println!("  send <src> <dest> <message...>");
    println!("  data");
    println!("  exit");
    println!("\nAny line starting with '{{' is handled as a JSON request, e.g.");
    println!("  {{\"op\":\"shortest_path\",\"start\":\"Sender\",\"end\":\"Receiver\"}}");
    println!("\nExamples:");
    println!("  add-link Sender Receiver 5");
    println!("  send Sender Receiver HELLO WORLD");
    println!(" ");
}

/// The raw remainder of `input` after its first `words` words and one separator
fn rest_after_words(input: &str, words: usize) -> &str {
    let mut rest = input;
    for _ in 0..words {
        rest = rest.trim_start();
        let end = rest.find(char::is_whitespace).unwrap_or(rest.len());
        rest = &rest[end..];
    }
    rest.strip_prefix(char::is_whitespace).unwrap_or(rest)
}

/// Turn a shell command into a request; `Err` carries the usage line to print
fn parse_command(input: &str) -> Result<Option<Request>, &'static str> {
    let mut parts = input.split_whitespace();
    let Some(command) = parts.next() else {
        return Ok(None);
    };
    let request = match command {
        "add-router" => match parts.next() {
            Some(name) => Request::AddRouter { name: name.to_string() },
            None => return Err("Usage: add-router <name>"),
        },
        "add-link" | "add-duplex" => match (parts.next(), parts.next(), parts.next()) {
            (Some(source), Some(target), Some(weight)) => {
                let (source, target) = (source.to_string(), target.to_string());
                let weight = Value::from(weight);
                if command == "add-link" {
                    Request::AddLink { source, target, weight }
                } else {
                    Request::AddDuplexLink { source, target, weight }
                }
            }
            _ => return Err("Usage: add-link|add-duplex <source> <target> <weight>"),
        },
        "path" => match (parts.next(), parts.next()) {
            (Some(start), Some(end)) => Request::ShortestPath { start: start.to_string(), end: end.to_string() },
            _ => return Err("Usage: path <start> <end>"),
        },
        "send" => match (parts.next(), parts.next()) {
            (Some(src), Some(dest)) => {
                let message = rest_after_words(input, 3).to_string();
                Request::SendMessage { src: src.to_string(), dest: dest.to_string(), message }
            }
            _ => return Err("Usage: send <src> <dest> <message...>"),
        },
        "data" => Request::GetData,
        _ => return Err("Unknown command, type 'help' for commands"),
    };
    Ok(Some(request))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    netsim::utils::logging::init_logging()?;

    let pipeline = PipelineConfig {
        segment_size: config::SEGMENT_SIZE,
        cipher_key: config::CIPHER_KEY,
        ..PipelineConfig::default()
    };
    let node = if config::BOOTSTRAP_DEFAULT_ROUTERS {
        SimulatorNode::with_default_routers(pipeline).await?
    } else {
        SimulatorNode::new(pipeline)?
    };

    println!("=== Network Simulator Shell ===");
    println!("Type 'help' for commands.");
    prompt()?;

    let stdin = BufReader::new(io::stdin());
    let mut lines = stdin.lines();
    while let Some(line) = lines.next_line().await? {
        let input = line.trim();
        if input == "exit" || input == "quit" {
            println!("Exiting shell.");
            break;
        }
        if input == "help" {
            print_help();
        } else if input.starts_with('{') {
            print_reply(&handle_json(&node, input).await);
        } else {
            match parse_command(&line) {
                Ok(Some(request)) => print_reply(&handle_request(&node, request).await),
                Ok(None) => {}
                Err(usage) => println!("{}", usage),
            }
        }
        prompt()?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands() {
        assert_eq!(parse_command(""), Ok(None));
        assert_eq!(
            parse_command("add-link A B 5"),
            Ok(Some(Request::AddLink { source: "A".into(), target: "B".into(), weight: Value::from("5") }))
        );
        assert_eq!(
            parse_command("send Sender Receiver HELLO WORLD"),
            Ok(Some(Request::SendMessage {
                src: "Sender".into(),
                dest: "Receiver".into(),
                message: "HELLO WORLD".into(),
            }))
        );
        assert_eq!(
            parse_command("send A B  two  spaces and \"quotes\" "),
            Ok(Some(Request::SendMessage {
                src: "A".into(),
                dest: "B".into(),
                message: " two  spaces and \"quotes\" ".into(),
            }))
        );
        assert_eq!(
            parse_command("send A B"),
            Ok(Some(Request::SendMessage { src: "A".into(), dest: "B".into(), message: String::new() }))
        );
        assert_eq!(parse_command("data"), Ok(Some(Request::GetData)));
        assert!(parse_command("path A").is_err());
        assert!(parse_command("fly A B").is_err());
    }
}
