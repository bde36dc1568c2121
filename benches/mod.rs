use criterion::{criterion_group, criterion_main};


criterion_group!(
    benches,
    network::application::http::uri::bench_parse,
    network::application::http::message::bench_format_request,
    network::application::http::message::bench_parse_response,
    network::application::http::client::bench_get
);
criterion_main!(benches);
