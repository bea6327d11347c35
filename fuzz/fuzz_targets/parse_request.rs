#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(s) = std::str::from_utf8(data) else {
        return;
    };

    let req = reqtext::parse_request(Some(s));
    assert_eq!(req, reqtext::parse_request(Some(s)));
    assert!(!req.path.contains('?'));

    let _ = req.to_json();
    let _ = reqtext::extract_query(s);
    let _ = reqtext::parse_body(s);
});
