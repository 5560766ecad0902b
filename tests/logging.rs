//! Make sure the parser's log output can be consumed by a real logger

use log::LevelFilter;
use real_poly::{poly, Poly64};
use simple_logger::SimpleLogger;

#[test]
fn parse_with_trace_logging() {
    // another test binary may have installed a logger already
    let _ = SimpleLogger::new().with_level(LevelFilter::Trace).init();

    assert_eq!(
        Poly64::from_string("3x^2 - x + 4").unwrap(),
        poly![4.0, -1.0, 3.0]
    );
    assert!(Poly64::from_string("3x^2 -- x").is_err());
}
