use std::sync::Once;

use tracing::{debug, info};
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    prelude::*,
    EnvFilter,
};

use crate::domain::Employee;

static TEST_SETUP: Once = Once::new();

/// Install the test subscriber once per test binary.
///
/// Honors `RUST_LOG`; defaults to debug output for this crate only.
pub fn init_test_setup() {
    TEST_SETUP.call_once(|| {
        setup_test_logging();
        info!("Test Setup complete");
    });
}

fn setup_test_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("orgtree=debug"));

    let subscriber = tracing_subscriber::registry().with(
        fmt::layer()
            .with_test_writer()
            .with_target(true)
            .with_thread_names(false)
            .with_span_events(FmtSpan::CLOSE)
            .with_filter(env_filter),
    );

    if tracing::dispatcher::has_been_set() {
        debug!("Tracing subscriber already set");
    } else {
        subscriber.try_init().unwrap_or_else(|e| {
            eprintln!("Error: Failed to set up logging: {}", e);
        });
    }
}

/// The reference hierarchy used across tests:
///
/// ```text
/// 1 Mark Zuckerberg
/// ├── 2 Sarah Donald
/// │   └── 3 Cassandra Reynolds
/// │       ├── 4 Mary Blue
/// │       └── 5 Bob Saget
/// │           └── 6 Tina Teff
/// │               └── 7 Will Turner
/// ├── 8 Tyler Simpson
/// │   ├── 9 Harry Tobs
/// │   │   └── 10 Thomas Brown
/// │   ├── 11 George Carrey
/// │   └── 12 Gary Styles
/// ├── 13 Bruce Willis
/// └── 14 Georgina Flangy
///     └── 15 Sophie Turner
/// ```
pub fn sample_hierarchy() -> Employee {
    let e = Employee::new;
    e(1, "Mark Zuckerberg").with_subordinates(vec![
        e(2, "Sarah Donald").with_subordinates(vec![e(3, "Cassandra Reynolds")
            .with_subordinates(vec![
                e(4, "Mary Blue"),
                e(5, "Bob Saget").with_subordinates(vec![
                    e(6, "Tina Teff").with_subordinates(vec![e(7, "Will Turner")])
                ]),
            ])]),
        e(8, "Tyler Simpson").with_subordinates(vec![
            e(9, "Harry Tobs").with_subordinates(vec![e(10, "Thomas Brown")]),
            e(11, "George Carrey"),
            e(12, "Gary Styles"),
        ]),
        e(13, "Bruce Willis"),
        e(14, "Georgina Flangy").with_subordinates(vec![e(15, "Sophie Turner")]),
    ])
}
