use super::*;
use pretty_assertions::assert_eq;

#[test]
fn codes_render_as_their_name() {
    assert_eq!(ErrorCode::E9001.to_string(), "E9001");
    assert_eq!(format!("[{}]", ErrorCode::E9002), "[E9002]");
}
