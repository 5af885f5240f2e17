//! Shared fixtures for integration tests

#![allow(dead_code)]

use std::io::{BufRead, BufReader, Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use txa::model::{
    AnalysisResult, PartsOfSpeech, Readability, TenseAnalysis, TextStats, WordFrequency,
};

pub const SAMPLE_TEXT: &str = "The cat sat on the mat. The mat was sat on by the cat.";

/// Result for `SAMPLE_TEXT` as the service reports it.
pub fn sample_result() -> AnalysisResult {
    AnalysisResult {
        text_stats: TextStats {
            word_count: 14,
            sentence_count: 2,
            avg_sentence_length: 7.0,
            avg_word_length: 2.6,
            character_count: 54,
        },
        readability: Readability {
            flesch_kincaid_grade: 0.5,
            reading_level: "Very Easy".into(),
            description: "Easily understood by an average 11-year-old student.".into(),
        },
        parts_of_speech: PartsOfSpeech {
            nouns: vec!["cat".into(), "mat".into()],
            verbs: vec!["sat".into(), "was".into()],
            prepositions: vec!["on".into(), "by".into()],
            ..Default::default()
        },
        passive_sentences: vec!["The mat was sat on by the cat.".into()],
        tense_analysis: TenseAnalysis {
            past: vec!["sat".into(), "was".into()],
            present: vec![],
            future: vec![],
        },
        word_frequency: vec![WordFrequency::new("the", 3), WordFrequency::new("cat", 1)],
    }
}

/// `sample_result()` as the service's JSON body.
pub fn sample_json() -> String {
    serde_json::to_string(&sample_result()).unwrap()
}

/// What the canned server saw.
#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub method: String,
    pub path: String,
    pub body: String,
}

/// Answers one connection per canned response, in order.
pub struct CannedServer {
    pub base_url: String,
    requests: mpsc::Receiver<CapturedRequest>,
}

impl CannedServer {
    pub fn start(responses: Vec<(u16, String)>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let base_url = format!("http://{}", listener.local_addr().unwrap());
        let (tx, rx) = mpsc::channel();

        thread::spawn(move || {
            for (status, body) in responses {
                let Ok((stream, _)) = listener.accept() else {
                    return;
                };
                if let Ok(request) = serve(stream, status, &body) {
                    let _ = tx.send(request);
                }
            }
        });

        Self {
            base_url,
            requests: rx,
        }
    }

    /// Single JSON response.
    pub fn respond(status: u16, body: impl Into<String>) -> Self {
        Self::start(vec![(status, body.into())])
    }

    pub fn next_request(&self) -> CapturedRequest {
        self.requests
            .recv_timeout(Duration::from_secs(5))
            .expect("server saw no request")
    }

    pub fn saw_request(&self) -> bool {
        self.requests.try_recv().is_ok()
    }
}

fn serve(stream: TcpStream, status: u16, body: &str) -> std::io::Result<CapturedRequest> {
    let mut reader = BufReader::new(stream.try_clone()?);

    let mut request_line = String::new();
    reader.read_line(&mut request_line)?;
    let mut parts = request_line.split_whitespace();
    let method = parts.next().unwrap_or_default().to_string();
    let path = parts.next().unwrap_or_default().to_string();

    let mut content_length = 0;
    loop {
        let mut line = String::new();
        reader.read_line(&mut line)?;
        let line = line.trim_end();
        if line.is_empty() {
            break;
        }
        if let Some((name, value)) = line.split_once(':') {
            if name.eq_ignore_ascii_case("content-length") {
                content_length = value.trim().parse().unwrap_or(0);
            }
        }
    }
    let mut request_body = vec![0; content_length];
    reader.read_exact(&mut request_body)?;

    let mut stream = stream;
    write!(
        stream,
        "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status,
        reason(status),
        body.len(),
        body
    )?;
    stream.flush()?;

    Ok(CapturedRequest {
        method,
        path,
        body: String::from_utf8_lossy(&request_body).into_owned(),
    })
}

fn reason(status: u16) -> &'static str {
    match status {
        200 => "OK",
        400 => "Bad Request",
        404 => "Not Found",
        422 => "Unprocessable Entity",
        500 => "Internal Server Error",
        503 => "Service Unavailable",
        _ => "Unknown",
    }
}

/// An address nothing listens on.
pub fn closed_address() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}
