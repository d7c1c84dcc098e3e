use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

use rbuilder_request::{
    Auth, Body, CacheType, DataRequest, Header, Headers, MediaType, Method, Parameter, Request,
    RequestError, SessionConfig, execute_all, execute_all_successful,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone)]
struct RecordedRequest {
    method: String,
    path: String,
    headers: Vec<(String, String)>,
    body: String,
}

impl RecordedRequest {
    fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

struct ServerHarness {
    base: String,
    addr: String,
    recorded: Arc<Mutex<Vec<RecordedRequest>>>,
    stop: Arc<AtomicBool>,
    join_handle: Option<thread::JoinHandle<()>>,
}

impl ServerHarness {
    fn url(&self, path: &str) -> Parameter {
        Parameter::url(&format!("{}{path}", self.base))
    }

    fn recorded(&self) -> Vec<RecordedRequest> {
        self.recorded.lock().expect("recorded lock").clone()
    }
}

impl Drop for ServerHarness {
    fn drop(&mut self) {
        self.stop.store(true, Ordering::SeqCst);
        let _ = TcpStream::connect(&self.addr);
        if let Some(handle) = self.join_handle.take() {
            let _ = handle.join();
        }
    }
}

fn find_header_end(bytes: &[u8]) -> Option<usize> {
    bytes.windows(4).position(|window| window == b"\r\n\r\n")
}

fn parse_request(stream: &mut TcpStream) -> Option<RecordedRequest> {
    let mut bytes = Vec::new();
    let mut buf = [0_u8; 4096];
    let mut header_end = None;
    let mut content_length = 0_usize;

    stream.set_read_timeout(Some(Duration::from_secs(2))).ok()?;

    loop {
        match stream.read(&mut buf) {
            Ok(0) => break,
            Ok(read) => {
                bytes.extend_from_slice(&buf[..read]);
                if header_end.is_none()
                    && let Some(pos) = find_header_end(&bytes)
                {
                    header_end = Some(pos + 4);
                    let head = String::from_utf8_lossy(&bytes[..pos]).to_string();
                    for line in head.lines() {
                        if line.to_ascii_lowercase().starts_with("content-length:")
                            && let Some(value) = line.split(':').nth(1)
                        {
                            content_length = value.trim().parse().unwrap_or(0);
                        }
                    }
                }
                if let Some(end) = header_end
                    && bytes.len() >= end + content_length
                {
                    break;
                }
            }
            Err(_) => return None,
        }
    }

    let end = header_end?;
    let head = String::from_utf8_lossy(&bytes[..end]).to_string();
    let mut lines = head.lines();
    let mut request_line = lines.next()?.split_whitespace();
    let method = request_line.next()?.to_string();
    let path = request_line.next()?.to_string();
    let headers = lines
        .filter_map(|line| line.split_once(':'))
        .map(|(name, value)| (name.trim().to_string(), value.trim().to_string()))
        .collect();
    let body = String::from_utf8_lossy(&bytes[end..(end + content_length).min(bytes.len())])
        .to_string();

    Some(RecordedRequest {
        method,
        path,
        headers,
        body,
    })
}

fn route(path: &str) -> (u16, &'static str, &'static str) {
    match path {
        "/todos/1" => (200, "application/json", r#"{"id":1,"title":"write tests"}"#),
        "/todos/2" => (200, "application/json", r#"{"id":2,"title":"ship"}"#),
        "/todos" => (201, "application/json", r#"{"id":3,"title":"created"}"#),
        "/html" => (200, "text/html", "<html></html>"),
        _ => (404, "text/plain", "not found"),
    }
}

fn write_response(stream: &mut TcpStream, status: u16, content_type: &str, body: &str) {
    let reason = if status < 300 { "OK" } else { "Error" };
    let payload = format!(
        "HTTP/1.1 {status} {reason}\r\nContent-Type: {content_type}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    );
    let _ = stream.write_all(payload.as_bytes());
    let _ = stream.flush();
}

fn start_server() -> ServerHarness {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind test server");
    listener
        .set_nonblocking(true)
        .expect("set nonblocking listener");
    let addr = listener.local_addr().expect("local addr").to_string();

    let stop = Arc::new(AtomicBool::new(false));
    let recorded = Arc::new(Mutex::new(Vec::new()));
    let stop_clone = Arc::clone(&stop);
    let recorded_clone = Arc::clone(&recorded);

    let join_handle = thread::spawn(move || {
        loop {
            if stop_clone.load(Ordering::SeqCst) {
                break;
            }
            match listener.accept() {
                Ok((mut stream, _)) => {
                    let _ = stream.set_nonblocking(false);
                    if let Some(request) = parse_request(&mut stream) {
                        let (status, content_type, body) = route(&request.path);
                        recorded_clone
                            .lock()
                            .expect("recorded lock")
                            .push(request);
                        write_response(&mut stream, status, content_type, body);
                    }
                }
                Err(error) if error.kind() == std::io::ErrorKind::WouldBlock => {
                    thread::sleep(Duration::from_millis(5));
                }
                Err(_) => break,
            }
        }
    });

    ServerHarness {
        base: format!("http://{addr}"),
        addr,
        recorded,
        stop,
        join_handle: Some(join_handle),
    }
}

#[derive(Debug, PartialEq, Deserialize)]
struct Todo {
    id: u32,
    title: String,
}

#[derive(Serialize)]
struct NewTodo<'a> {
    title: &'a str,
}

#[test]
fn get_decodes_and_sends_headers() {
    let server = start_server();
    let (todo, meta) = Request::<Todo>::new(|b| {
        b.push(server.url("/todos/1"));
        b.push(Headers::build(|h| {
            h.push(Header::accept(MediaType::Json));
            h.push(Header::authorization(&Auth::basic("test", "rest")));
            h.push(Header::cache_control(CacheType::NoCache));
        }));
    })
    .with_session(SessionConfig::new().user_agent("rbuilder-tests"))
    .object_with_response()
    .expect("todo decodes");

    assert_eq!(
        todo,
        Todo {
            id: 1,
            title: "write tests".into()
        }
    );
    assert_eq!(meta.status, 200);
    assert_eq!(meta.header("content-type"), Some("application/json"));

    let recorded = server.recorded();
    assert_eq!(recorded.len(), 1);
    let request = &recorded[0];
    assert_eq!(request.method, "GET");
    assert_eq!(request.path, "/todos/1");
    assert_eq!(request.header("accept"), Some("application/json"));
    assert_eq!(request.header("authorization"), Some("Basic dGVzdDpyZXN0"));
    assert_eq!(request.header("cache-control"), Some("no-cache"));
    assert_eq!(request.header("user-agent"), Some("rbuilder-tests"));
}

#[test]
fn post_sends_json_body() {
    let server = start_server();
    let body = Body::json(&NewTodo { title: "created" }).expect("encodes");
    let todo = Request::<Todo>::new(|b| {
        b.push(server.url("/todos"));
        b.push(Method::Post);
        b.push(Header::content_type(MediaType::Json));
        b.push(body);
    })
    .object()
    .expect("created todo");

    assert_eq!(todo.id, 3);
    let recorded = server.recorded();
    assert_eq!(recorded[0].method, "POST");
    assert_eq!(recorded[0].body, r#"{"title":"created"}"#);
    assert_eq!(recorded[0].header("content-type"), Some("application/json"));
}

#[test]
fn status_and_decode_failures_are_distinct() {
    let server = start_server();

    let missing = Request::<Todo>::new(|b| {
        b.push(server.url("/nope"));
    })
    .object();
    match missing {
        Err(RequestError::Http { status, body }) => {
            assert_eq!(status, 404);
            assert_eq!(body.as_deref(), Some(b"not found".as_slice()));
        }
        other => panic!("expected HTTP 404, got {other:?}"),
    }

    let html = Request::<Todo>::new(|b| {
        b.push(server.url("/html"));
    });
    assert!(html.object().is_err_and(|err| err.is_decode()));
    assert_eq!(html.data().expect("html bytes"), b"<html></html>");
}

#[test]
fn refused_connection_is_a_transport_error() {
    let port = {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
        listener.local_addr().expect("addr").port()
    };
    let result = DataRequest::new(|b| {
        b.push(Parameter::url(&format!("http://127.0.0.1:{port}/")));
        b.push(Parameter::connect_timeout(Duration::from_millis(500)));
    })
    .data();
    assert!(result.is_err_and(|err| err.is_transport()));
}

#[test]
fn missing_url_is_a_transport_error() {
    let result = DataRequest::new(|b| {
        b.push(Method::Get);
    })
    .data();
    assert!(result.is_err_and(|err| err.is_transport()));
}

#[test]
fn fan_out_preserves_order_around_a_failure() {
    let server = start_server();
    let paths = ["/todos/1", "/missing", "/todos/2"];
    let build = || {
        paths
            .iter()
            .map(|path| {
                Request::<Todo>::new(|b| {
                    b.push(server.url(path));
                })
            })
            .collect::<Vec<_>>()
    };

    let outcomes = execute_all(build());
    assert_eq!(outcomes.len(), 3);
    assert_eq!(outcomes[0].as_ref().map(|todo| todo.id).ok(), Some(1));
    assert_eq!(outcomes[1].as_ref().err().and_then(RequestError::status), Some(404));
    assert_eq!(outcomes[2].as_ref().map(|todo| todo.id).ok(), Some(2));

    let ids: Vec<u32> = execute_all_successful(build())
        .into_iter()
        .map(|todo| todo.id)
        .collect();
    assert_eq!(ids, vec![1, 2]);
}
