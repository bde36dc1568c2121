use criterion::{BatchSize, Criterion, Throughput};
use wget_lite::network::application::http::Client;
use wget_lite::network::error::Error;
use wget_lite::network::{Close, Connect, Connection, Read, Write};

/// An in-memory connection replaying a canned response.
struct ReplayConnection {
    response: &'static [u8],
    pos: usize,
}

impl Read for ReplayConnection {
    type Error = Error;
    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        let remaining = &self.response[self.pos..];
        let len = buf.len().min(remaining.len());
        buf[..len].copy_from_slice(&remaining[..len]);
        self.pos += len;
        Ok(len)
    }
}

impl Write for ReplayConnection {
    type Error = Error;
    fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
        Ok(buf.len())
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

impl Close for ReplayConnection {
    type Error = Error;
    fn close(self) -> Result<(), Self::Error> {
        Ok(())
    }
}

impl Connection for ReplayConnection {}

struct ReplayNetwork {
    response: &'static [u8],
}

impl Connect for ReplayNetwork {
    type Connection = ReplayConnection;
    type Error = Error;

    fn connect(&mut self, _remote: &str) -> Result<Self::Connection, Self::Error> {
        Ok(ReplayConnection {
            response: self.response,
            pos: 0,
        })
    }
}

const RESPONSE: &[u8] = b"HTTP/1.1 200 OK\r\nContent-Type: text/plain\r\n\r\nhello from the bench";

pub fn bench_get(c: &mut Criterion) {
    let mut group = c.benchmark_group("client");
    group.throughput(Throughput::Bytes(RESPONSE.len() as u64));
    group.bench_function("get", |b| {
        b.iter_batched_ref(
            || Client::new(ReplayNetwork { response: RESPONSE }),
            |client| {
                client
                    .get("http://example.com/bench")
                    .expect("Failed to get");
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}
