// Page server - one connection at a time, same page for every request

use std::io;
use std::net::SocketAddr;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpSocket, TcpStream};

use super::render::{render_error_page, render_page};
use crate::config::Config;
use crate::error::AppResult;
use crate::routes::parser::read_routes;

pub struct PageServer {
    listener: TcpListener,
    config: Config,
}

impl PageServer {
    /// Bind the listening socket with the configured address and backlog
    pub fn bind(config: Config) -> io::Result<Self> {
        let addr = SocketAddr::new(config.bind_address, config.port);
        let socket = match addr {
            SocketAddr::V4(_) => TcpSocket::new_v4()?,
            SocketAddr::V6(_) => TcpSocket::new_v6()?,
        };
        socket.set_reuseaddr(true)?;
        socket.bind(addr)?;
        let listener = socket.listen(config.backlog)?;

        Ok(PageServer { listener, config })
    }

    pub fn local_addr(&self) -> io::Result<SocketAddr> {
        self.listener.local_addr()
    }

    /// Serve connections forever, strictly one after another
    pub async fn run(&self) {
        loop {
            if let Err(e) = self.handle_next().await {
                tracing::warn!("Connection failed: {}", e);
            }
        }
    }

    /// Accept a single connection, answer it, and close it
    pub async fn handle_next(&self) -> AppResult<()> {
        let (mut stream, peer) = self.listener.accept().await?;
        tracing::info!("Got connection from {}", peer);

        // The request is never interpreted
        let mut request = vec![0u8; self.config.request_limit];
        let received = stream.read(&mut request).await?;
        tracing::debug!("Discarding {} request bytes from {}", received, peer);

        let response = self.build_response();
        stream.write_all(&response).await?;

        // Unread request bytes would turn the close into a reset
        let drained = drain_queued(&stream, &mut request)?;
        if drained > 0 {
            tracing::debug!("Drained {} more request bytes from {}", drained, peer);
        }
        stream.shutdown().await?;

        Ok(())
    }

    fn build_response(&self) -> Vec<u8> {
        let page = read_routes(&self.config.route_table_path).and_then(|routes| {
            tracing::debug!("Rendering {} routes", routes.len());
            render_page(
                &self.config.page,
                &routes,
                self.config.compat.trailing_flag_separator,
            )
        });

        match page {
            Ok(body) => http_response(
                "200 OK",
                &body,
                self.config.compat.misspelled_content_type,
            ),
            Err(e) => {
                tracing::error!("Failed to build routing table page: {}", e);
                http_response(
                    e.status_line(),
                    &render_error_page(&self.config.page, &e),
                    self.config.compat.misspelled_content_type,
                )
            }
        }
    }
}

/// Read whatever the peer has already queued without waiting for more
fn drain_queued(stream: &TcpStream, buf: &mut [u8]) -> io::Result<usize> {
    let mut drained = 0;
    loop {
        match stream.try_read(buf) {
            Ok(0) => return Ok(drained),
            Ok(n) => drained += n,
            Err(e) if e.kind() == io::ErrorKind::WouldBlock => return Ok(drained),
            Err(e) => return Err(e),
        }
    }
}

/// Build an HTTP/1.1 response carrying an HTML body, followed by a trailing CRLF
pub fn http_response(status: &str, body: &str, misspelled_content_type: bool) -> Vec<u8> {
    let content_type = if misspelled_content_type {
        "Conent-Type"
    } else {
        "Content-Type"
    };

    format!(
        "HTTP/1.1 {}\r\n{}: text/html\r\nContent-Length: {}\r\n\r\n{}\r\n",
        status,
        content_type,
        body.len(),
        body
    )
    .into_bytes()
}
