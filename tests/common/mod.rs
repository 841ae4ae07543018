//! Shared utilities for provider integration tests.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// Start a mock provider that routes on the request path.
///
/// The handler receives the raw path (including query string) and returns
/// a status code and JSON body.
pub async fn start_mock_provider<F>(addr: SocketAddr, handler: F)
where
    F: Fn(&str) -> (u16, String) + Send + Sync + 'static,
{
    let listener = TcpListener::bind(addr).await.unwrap();
    let handler = Arc::new(handler);

    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((mut socket, _)) => {
                    let handler = handler.clone();
                    tokio::spawn(async move {
                        let mut buf = [0u8; 4096];
                        let n = socket.read(&mut buf).await.unwrap_or(0);
                        let request = String::from_utf8_lossy(&buf[..n]).to_string();
                        let path = request
                            .lines()
                            .next()
                            .and_then(|line| line.split_whitespace().nth(1))
                            .unwrap_or("/")
                            .to_string();

                        let (status, body) = handler(&path);
                        let status_text = match status {
                            200 => "200 OK",
                            404 => "404 Not Found",
                            500 => "500 Internal Server Error",
                            503 => "503 Service Unavailable",
                            _ => "200 OK",
                        };
                        let response = format!(
                            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                            status_text,
                            body.len(),
                            body
                        );
                        let _ = socket.write_all(response.as_bytes()).await;
                        let _ = socket.shutdown().await;
                        tokio::time::sleep(Duration::from_millis(10)).await;
                    });
                }
                Err(_) => break,
            }
        }
    });
}

/// BlockCypher-shaped address payload: three unspent entries worth
/// 0.9000007, 0.15500105 and 0.1 coins.
pub fn blockcypher_utxo_response() -> String {
    r#"{
        "address": "testaddress",
        "txrefs": [
            {
                "tx_hash": "e0832ca854e4577cab20413013d6251c4a426022112d9ff222067bb5d8b6b723",
                "tx_output_n": 0,
                "value": 90000070,
                "confirmations": 9184,
                "script": "76a9143804c5840717fb1c5c8ac0bd2726556a51e91fcd99ac"
            },
            {
                "tx_hash": "308b997d8583aa48a7b265246eb76e5d030495468bbb87989606aea769b03600",
                "tx_output_n": 1,
                "value": 15500105,
                "confirmations": 10218,
                "script": "76a9143804c5840717fb1c5c8ac0bd2726556a51e91fcd99ac"
            },
            {
                "tx_hash": "e7cc6e21b9f2d1d7bdc4fd40096ba74bc714f434c2dc5a5e414ad8c32235368a",
                "tx_output_n": 1,
                "value": 10000000,
                "confirmations": 16956,
                "script": "76a9143804c5840717fb1c5c8ac0bd2726556a51e91fcd99ac"
            }
        ]
    }"#
    .to_string()
}

/// cryptoid-shaped unspent payload with the same three entries.
pub fn cryptoid_utxo_response() -> String {
    r#"{
        "unspent_outputs": [
            {
                "tx_hash": "e0832ca854e4577cab20413013d6251c4a426022112d9ff222067bb5d8b6b723",
                "tx_ouput_n": 0,
                "value": "90000070",
                "confirmations": 9268,
                "script": "76a9143804c5840717fb1c5c8ac0bd2726556a51e91fcd99ac"
            },
            {
                "tx_hash": "308b997d8583aa48a7b265246eb76e5d030495468bbb87989606aea769b03600",
                "tx_ouput_n": 1,
                "value": "15500105",
                "confirmations": 10302,
                "script": "76a9143804c5840717fb1c5c8ac0bd2726556a51e91fcd99ac"
            },
            {
                "tx_hash": "e7cc6e21b9f2d1d7bdc4fd40096ba74bc714f434c2dc5a5e414ad8c32235368a",
                "tx_ouput_n": 1,
                "value": "10000000",
                "confirmations": 17040,
                "script": "76a9143804c5840717fb1c5c8ac0bd2726556a51e91fcd99ac"
            }
        ]
    }"#
    .to_string()
}
