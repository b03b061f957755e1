//! Shared test fixtures for integration tests.
//!
//! Every fixture builds its own [`DocsService`] over a [`ScriptedTransport`],
//! so tests never touch the network and each starts with a cold cache.
//!
//! # Available Fixtures
//!
//! - `transport`: an empty scripted transport (every URL fails until set)
//! - `service`: a service over [`test_registry`] and a transport preloaded
//!   with [`DOCS_FEED`] and one README per repository

#![allow(dead_code)] // Helpers are shared across integration test crates

use futures::FutureExt;
use futures::future::BoxFuture;
use preact_docs_mcp::{DocsService, EngineConfig, FetchCause, Registry, Repository, Transport};
use rstest::fixture;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

pub const DOCS_URL: &str = "https://docs.test/llms.txt";
pub const PRIMARY_README_URL: &str = "https://raw.test/preact/README.md";
pub const SIGNALS_README_URL: &str = "https://raw.test/signals/README.md";
pub const ISO_README_URL: &str = "https://raw.test/preact-iso/README.md";

/// A small docs feed in the same shape as the real one.
pub const DOCS_FEED: &str = "# Preact Documentation

This file is generated.

---

**Description:** Learn how to build your first Preact app
## Getting Started
Install with npm and render a component.

```jsx
import { render } from 'preact';
render(<App />, document.body);
```

---

**Description:** Manage local state in function components
## useState
`useState(initialValue)` returns the current state and a setter.

```jsx
const [count, setCount] = useState(0);
```

---

**Description:** Reactive values that update the UI automatically
## Signals
A signal is used to hold reactive state. Import it from @preact/signals.

```js
const count = signal(0);
```

---

**Description:** Complete list of exported functions and their signatures
## API Reference
Every state helper and every signal helper is listed here. `render(vnode, parent)` returns nothing.

---

**Description:** Configure the build pipeline
## Installation
Use the Vite preset.
";

/// In-memory transport that serves canned bodies and counts calls.
#[derive(Default)]
pub struct ScriptedTransport {
    bodies: Mutex<HashMap<String, Result<String, FetchCause>>>,
    calls: Mutex<HashMap<String, usize>>,
    total: AtomicUsize,
}

impl ScriptedTransport {
    pub fn serve(&self, url: &str, body: &str) {
        self.bodies
            .lock()
            .unwrap()
            .insert(url.to_string(), Ok(body.to_string()));
    }

    pub fn fail(&self, url: &str, status: u16, reason: &str) {
        self.bodies.lock().unwrap().insert(
            url.to_string(),
            Err(FetchCause::Status {
                status,
                reason: reason.to_string(),
            }),
        );
    }

    /// Network calls made for `url`.
    pub fn calls(&self, url: &str) -> usize {
        self.calls.lock().unwrap().get(url).copied().unwrap_or(0)
    }

    /// Network calls made for any URL.
    pub fn total_calls(&self) -> usize {
        self.total.load(Ordering::SeqCst)
    }
}

impl Transport for ScriptedTransport {
    fn get<'a>(&'a self, url: &'a str) -> BoxFuture<'a, Result<String, FetchCause>> {
        self.total.fetch_add(1, Ordering::SeqCst);
        *self.calls.lock().unwrap().entry(url.to_string()).or_default() += 1;
        let result = self
            .bodies
            .lock()
            .unwrap()
            .get(url)
            .cloned()
            .unwrap_or_else(|| Err(FetchCause::Transport("connection refused".to_string())));
        futures::future::ready(result).boxed()
    }
}

/// Three repositories: the primary one with a feed, a non-primary one sharing
/// the feed, and one with only a README.
pub fn test_registry() -> Registry {
    Registry::new(vec![
        Repository::new("preact", "Core library", PRIMARY_README_URL, Some(DOCS_URL)),
        Repository::new(
            "@preact/signals",
            "Signals bindings",
            SIGNALS_README_URL,
            Some(DOCS_URL),
        ),
        Repository::new("preact-iso", "Isomorphic helpers", ISO_README_URL, None),
    ])
}

/// A service paired with the transport it fetches through.
pub struct TestService {
    pub service: DocsService,
    pub transport: Arc<ScriptedTransport>,
}

pub fn build_service(transport: Arc<ScriptedTransport>, config: &EngineConfig) -> TestService {
    let service = DocsService::with_transport(test_registry(), transport.clone(), config);
    TestService { service, transport }
}

#[fixture]
pub fn transport() -> Arc<ScriptedTransport> {
    Arc::new(ScriptedTransport::default())
}

#[fixture]
pub fn service(transport: Arc<ScriptedTransport>) -> TestService {
    preact_docs_mcp::logging::init();
    transport.serve(DOCS_URL, DOCS_FEED);
    transport.serve(PRIMARY_README_URL, "# Preact\n\nFast 3kB alternative to React.");
    transport.serve(SIGNALS_README_URL, "# Signals\n\nReactive state for Preact.");
    transport.serve(ISO_README_URL, "# preact-iso\n\nRouting and lazy loading.");
    build_service(transport, &EngineConfig::default())
}
