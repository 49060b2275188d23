use std::{net::TcpStream, sync::Arc, sync::OnceLock, sync::mpsc, time::Duration};

use people_server::interface_adapters::state::{AppState, InMemoryPeopleService, StaticCredentials};

pub const USER: &str = "user";
pub const PASSWORD: &str = "password";

static BASE_URL: OnceLock<String> = OnceLock::new();

// Fresh in-memory state guarded by the single test user.
fn test_state() -> AppState {
    AppState {
        people: Arc::new(InMemoryPeopleService::default()),
        credentials: Arc::new(StaticCredentials::single(USER, PASSWORD)),
    }
}

// Base URL of the people server shared by every test in this binary.
pub fn ensure_server() -> &'static str {
    BASE_URL.get_or_init(start_server).as_str()
}

fn start_server() -> String {
    let (addr_tx, addr_rx) = mpsc::channel();

    // Own thread and runtime: the server must outlive each `#[tokio::test]` runtime.
    std::thread::spawn(move || {
        let runtime = tokio::runtime::Runtime::new().expect("test runtime");
        runtime.block_on(async move {
            let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
                .await
                .expect("bind ephemeral test port");
            let addr = listener.local_addr().expect("get local addr");
            addr_tx.send(addr).expect("publish server addr");

            people_server::serve(listener, test_state())
                .await
                .expect("people server failed");
        });
    });

    let addr = addr_rx
        .recv_timeout(Duration::from_secs(5))
        .expect("people server did not publish its address");
    for _ in 0..100 {
        if TcpStream::connect(addr).is_ok() {
            return format!("http://{addr}");
        }
        std::thread::sleep(Duration::from_millis(20));
    }
    panic!("people server at {addr} is not accepting connections");
}
