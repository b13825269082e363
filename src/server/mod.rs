// src/server/mod.rs
//
// responsibilities:
//  * accept loop over a TcpListener, one threadpool job per connection
//  * connection handler: parse -> validate -> drain -> dispatch -> respond

use std::io::{self, BufRead, BufReader};
use std::net::{SocketAddr, TcpListener, TcpStream, ToSocketAddrs};
use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::dispatcher::{Dispatch, Dispatcher};
use crate::http::{RequestLine, Status};
use crate::static_files::{NoStaticFiles, StaticFiles};
use crate::threadpool::ThreadPool;

mod response;

const DEFAULT_THREAD_COUNT: usize = 4;
const INDEX_RESOURCE: &str = "/index.html";

pub struct ServerBuilder {
    bind_addrs: Vec<SocketAddr>,
    thread_count: usize,
    static_files: Box<dyn StaticFiles>,
}

impl ServerBuilder {
    pub fn new<A: ToSocketAddrs>(addr: A) -> io::Result<ServerBuilder> {
        let bind_addrs: Vec<SocketAddr> = addr.to_socket_addrs()?.collect();

        if bind_addrs.is_empty() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                "invalid address",
            ));
        }

        Ok(ServerBuilder {
            bind_addrs,
            thread_count: DEFAULT_THREAD_COUNT,
            static_files: Box::new(NoStaticFiles),
        })
    }

    pub fn thread_count(&mut self, thread_count: usize) -> &mut Self {
        self.thread_count = thread_count;
        self
    }

    pub fn static_files<S: StaticFiles + 'static>(&mut self, static_files: S) -> &mut Self {
        self.static_files = Box::new(static_files);
        self
    }

    /// Freezes the dispatcher behind an `Arc`. Registration must be complete
    /// by this point; the route table is read-only for the serving lifetime.
    pub fn build<D: Dispatcher>(self, dispatcher: D) -> Server<D> {
        Server {
            bind_addrs: self.bind_addrs,
            thread_count: self.thread_count,
            dispatcher: Arc::new(dispatcher),
            static_files: Arc::from(self.static_files),
        }
    }
}

pub struct Server<D> {
    bind_addrs: Vec<SocketAddr>,
    thread_count: usize,
    dispatcher: Arc<D>,
    static_files: Arc<dyn StaticFiles>,
}

impl<D> Server<D>
where
    D: Dispatcher + 'static,
{
    pub fn builder<A: ToSocketAddrs>(addr: A) -> io::Result<ServerBuilder> {
        ServerBuilder::new(addr)
    }

    pub fn port(&self) -> Option<u16> {
        self.bind_addrs.first().map(|a| a.port())
    }

    /// Binds the listener and serves until the accepting socket is closed
    /// externally. Each accepted connection is handled to completion by one
    /// pool worker: exactly one request, one response, then close.
    pub fn serve(self) -> io::Result<()> {
        let listener = TcpListener::bind(&*self.bind_addrs)?;
        info!(
            addr = %listener.local_addr()?,
            threads = self.thread_count,
            "server listening"
        );
        let pool = ThreadPool::new(self.thread_count);

        for stream in listener.incoming() {
            let stream = match stream {
                Ok(s) => s,
                Err(_) => continue,
            };

            let dispatcher = Arc::clone(&self.dispatcher);
            let static_files = Arc::clone(&self.static_files);

            pool.execute(move || {
                if let Err(e) = handle_connection(stream, &*dispatcher, &*static_files) {
                    warn!(error = %e, "connection error");
                }
            });
        }
        Ok(())
    }

    /// Handles one already-accepted connection. Useful for tests.
    pub fn handle(&self, stream: TcpStream) -> io::Result<()> {
        handle_connection(stream, &*self.dispatcher, &*self.static_files)
    }
}

fn handle_connection<D: Dispatcher>(
    mut stream: TcpStream,
    dispatcher: &D,
    static_files: &dyn StaticFiles,
) -> io::Result<()> {
    let mut reader = BufReader::new(stream.try_clone()?);

    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        // peer closed before sending a request line; no response
        return Ok(());
    }
    let raw_line = line.trim_end_matches(['\r', '\n']);
    debug!(line = raw_line, "request");

    let request = match RequestLine::parse(raw_line) {
        Ok(r) => r,
        Err(_) => return response::send_error(&mut stream, &Status::BAD_REQUEST, "Bad Request"),
    };

    if request.method != "GET" {
        return response::send_error(
            &mut stream,
            &Status::METHOD_NOT_ALLOWED,
            "Method Not Allowed",
        );
    }

    drain_headers(&mut reader)?;

    match dispatcher.dispatch(&request.path, &request.query) {
        Dispatch::Found(body) => {
            response::send(&mut stream, &Status::OK, "text/html", body.as_bytes())
        }
        Dispatch::HandlerError(body) => response::send(
            &mut stream,
            &Status::INTERNAL_SERVER_ERROR,
            "text/html",
            body.as_bytes(),
        ),
        Dispatch::NotFound => {
            let path = if request.path == "/" {
                INDEX_RESOURCE
            } else {
                request.path.as_str()
            };
            match static_files.lookup(path) {
                Some(content) => response::send(
                    &mut stream,
                    &Status::OK,
                    content.content_type,
                    &content.bytes,
                ),
                None => response::send_error(&mut stream, &Status::NOT_FOUND, "Not Found"),
            }
        }
    }
}

// header content is never inspected; read lines until the blank separator
// or end of stream
fn drain_headers<R: BufRead>(reader: &mut R) -> io::Result<()> {
    let mut line = String::new();
    loop {
        line.clear();
        let n = reader.read_line(&mut line)?;
        if n == 0 || line.trim_end_matches(['\r', '\n']).is_empty() {
            return Ok(());
        }
    }
}
