//! Integration test: log output of the depth guard.
//!
//! Kept in its own test binary so the scoped subscriber below sees every
//! event without competing with a global one.

use serde_json::json;
use shapecheck_schema::{Schema, Validator, ValidatorConfig, ViolationKind};
use std::io;
use std::sync::{Arc, Mutex};
use tracing_subscriber::fmt::MakeWriter;

#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl Captured {
    fn lines(&self) -> Vec<String> {
        let bytes = self.0.lock().unwrap();
        String::from_utf8_lossy(&bytes)
            .lines()
            .map(str::to_owned)
            .collect()
    }
}

impl io::Write for Captured {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for Captured {
    type Writer = Captured;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

fn capture<T>(f: impl FnOnce() -> T) -> (T, Vec<String>) {
    let captured = Captured::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(captured.clone())
        .with_ansi(false)
        .without_time()
        .with_max_level(tracing::Level::TRACE)
        .finish();
    let out = tracing::subscriber::with_default(subscriber, f);
    (out, captured.lines())
}

#[test]
fn depth_guard_warns_once_per_pass() {
    let validator = Validator::new(ValidatorConfig::default().with_max_depth(1)).unwrap();
    let schema = Schema::array(Schema::array(Schema::number()));
    let data = json!([[1], [2], [3]]);

    let (violations, lines) = capture(|| validator.violations(&data, &schema));

    assert_eq!(violations.len(), 3);
    assert!(violations
        .violations()
        .iter()
        .all(|v| v.kind == ViolationKind::DepthExceeded { limit: 1 }));

    let warnings: Vec<&String> = lines.iter().filter(|l| l.contains("WARN")).collect();
    assert_eq!(warnings.len(), 1, "{lines:#?}");
    assert!(warnings[0].contains("schema nesting exceeds max depth"));
    assert_eq!(
        lines
            .iter()
            .filter(|l| l.contains("another node beyond max depth"))
            .count(),
        2
    );
}

#[test]
fn each_pass_gets_its_own_warning() {
    let validator = Validator::new(ValidatorConfig::default().with_max_depth(1)).unwrap();
    let schema = Schema::array(Schema::number());
    let data = json!([1, 2]);

    let (results, lines) = capture(|| {
        [
            validator.matches(&data, &schema),
            validator.matches(&data, &schema),
        ]
    });

    assert_eq!(results, [false, false]);
    assert_eq!(lines.iter().filter(|l| l.contains("WARN")).count(), 2);
}
