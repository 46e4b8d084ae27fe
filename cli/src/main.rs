//! Interactive terminal front-end for the task backend.
//!
//! The core crate never touches the network; this binary is the host that
//! executes its `HttpRequest` values with ureq, feeds the responses back,
//! and renders the mirrored list and notices. One blocking round-trip at a
//! time, which is exactly the sequential-await model the store expects.

use std::io::{self, BufRead, Write};

use tasklist_core::{HttpMethod, HttpRequest, HttpResponse, Notice, TodoStore};

enum Command {
    Add(String),
    Remove(String),
    Clear,
    List,
    Help,
    Quit,
}

fn parse_command(line: &str) -> Option<Command> {
    let line = line.trim();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim_start()),
        None => (line, ""),
    };
    match word {
        "add" => Some(Command::Add(rest.to_string())),
        "rm" | "del" => Some(Command::Remove(rest.to_string())),
        "clear" => Some(Command::Clear),
        "ls" | "list" => Some(Command::List),
        "help" => Some(Command::Help),
        "quit" | "exit" => Some(Command::Quit),
        _ => None,
    }
}

/// Execute an `HttpRequest` and return the response as plain data.
///
/// ureq's status-code-as-error behavior is disabled so non-2xx responses
/// reach the store as data; transport failures (connection refused, DNS)
/// are mapped to the status-0 convention.
fn execute(agent: &ureq::Agent, req: HttpRequest) -> HttpResponse {
    let result = match (req.method, req.body) {
        (HttpMethod::Get, _) => agent.get(&req.path).call(),
        (HttpMethod::Delete, _) => agent.delete(&req.path).call(),
        (HttpMethod::Post, Some(body)) => agent
            .post(&req.path)
            .content_type("application/json")
            .send(body.as_bytes()),
        (HttpMethod::Post, None) => agent.post(&req.path).send_empty(),
    };

    match result {
        Ok(mut response) => {
            let status = response.status().as_u16();
            let body = response.body_mut().read_to_string().unwrap_or_default();
            HttpResponse {
                status,
                headers: Vec::new(),
                body,
            }
        }
        Err(e) => HttpResponse {
            status: 0,
            headers: Vec::new(),
            body: e.to_string(),
        },
    }
}

fn show(notice: &Notice) {
    match notice {
        Notice::Success(msg) => println!("ok: {msg}"),
        Notice::Error(msg) => println!("error: {msg}"),
    }
}

fn render(store: &TodoStore) {
    if store.is_empty() {
        println!("No tasks yet. Add one!");
        return;
    }
    let n = store.len();
    println!("You have {n} {}", if n == 1 { "task" } else { "tasks" });
    for task in store.tasks() {
        println!("  {}  {}", task.id, task.text);
    }
}

fn print_help() {
    println!("commands: add <text> | rm <id> | clear | ls | help | quit");
}

fn main() -> io::Result<()> {
    let base_url = match std::env::var("BACKEND_URL") {
        Ok(url) => url,
        Err(_) => {
            eprintln!("BACKEND_URL must be set, e.g. http://127.0.0.1:3000/todos");
            std::process::exit(2);
        }
    };

    let agent = ureq::Agent::config_builder()
        .http_status_as_error(false)
        .build()
        .new_agent();
    let mut store = TodoStore::new(&base_url);

    // Initial load; a failure leaves the list empty until the next fetch.
    let _ = store.finish_load(execute(&agent, store.begin_load()));
    render(&store);
    print_help();

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    loop {
        print!("> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let Some(command) = parse_command(&line) else {
            print_help();
            continue;
        };

        match command {
            Command::Add(text) => match store.begin_add(&text) {
                Ok(pending) => {
                    render(&store);
                    let temp_id = pending.temp_id.clone();
                    let outcome = store.finish_add(&temp_id, execute(&agent, pending.request));
                    if let Some(reload) = outcome.reload {
                        let _ = store.finish_load(execute(&agent, reload));
                    }
                    show(&outcome.notice);
                    render(&store);
                }
                Err(notice) => show(&notice),
            },
            Command::Remove(id) => {
                if id.is_empty() {
                    println!("usage: rm <id>");
                    continue;
                }
                let req = store.begin_remove(&id);
                render(&store);
                let outcome = store.finish_remove(execute(&agent, req));
                if let Some(reload) = outcome.reload {
                    let _ = store.finish_load(execute(&agent, reload));
                }
                show(&outcome.notice);
                render(&store);
            }
            Command::Clear => {
                // One round-trip at a time; failed deletions are counted and
                // reported rather than silently dropped.
                let mut failed = 0;
                for req in store.begin_clear_all() {
                    let resp = execute(&agent, req);
                    if !(200..300).contains(&resp.status) {
                        failed += 1;
                    }
                }
                let notice = store.finish_clear_all(failed);
                show(&notice);
                render(&store);
            }
            Command::List => {
                let _ = store.finish_load(execute(&agent, store.begin_load()));
                render(&store);
            }
            Command::Help => print_help(),
            Command::Quit => break,
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_add_keeps_the_rest_of_the_line() {
        let Some(Command::Add(text)) = parse_command("add Buy milk and eggs") else {
            panic!("expected Add");
        };
        assert_eq!(text, "Buy milk and eggs");
    }

    #[test]
    fn parse_add_without_text_yields_empty_string() {
        // The store rejects the empty text with its own notice.
        let Some(Command::Add(text)) = parse_command("add") else {
            panic!("expected Add");
        };
        assert_eq!(text, "");
    }

    #[test]
    fn parse_remove_takes_an_id() {
        let Some(Command::Remove(id)) = parse_command("rm abc123") else {
            panic!("expected Remove");
        };
        assert_eq!(id, "abc123");
    }

    #[test]
    fn parse_aliases() {
        assert!(matches!(parse_command("del x"), Some(Command::Remove(_))));
        assert!(matches!(parse_command("list"), Some(Command::List)));
        assert!(matches!(parse_command("exit"), Some(Command::Quit)));
    }

    #[test]
    fn parse_unknown_is_none() {
        assert!(parse_command("frobnicate").is_none());
        assert!(parse_command("").is_none());
    }

    #[test]
    fn parse_trims_surrounding_whitespace() {
        assert!(matches!(parse_command("  clear  "), Some(Command::Clear)));
    }
}
