//! The process-wide classifier is global state, so every scenario lives in
//! one test function to keep the harness from interleaving them.

use bangou_core::{is_uncensored, reset_prefix_matcher, BangouError, ParserConfig};

#[test]
fn shared_classifier_lifecycle() {
    reset_prefix_matcher();

    // built-in signatures never read configuration, even a broken one
    for number in ["4030-1739", "n1012", "HEYZO-2636", "xxx-av-22061", "heydouga-4102-023"] {
        assert!(is_uncensored(number, "").unwrap(), "number: {number}");
    }

    // empty configuration surfaces as an error on the first miss
    assert!(matches!(
        is_uncensored("SNIS-829", ""),
        Err(BangouError::ConfigurationInvalid(_))
    ));

    // first successful build is cached for the process
    let config = ParserConfig::new().with_uncensored_prefixes(["SNIS"]);
    assert!(is_uncensored("SNIS-829", &config).unwrap());
    assert!(is_uncensored("SNIS-829", "ABP").unwrap());
    assert!(!is_uncensored("ABP-358", "ABP").unwrap());

    // reset makes the next miss read the new list
    reset_prefix_matcher();
    assert!(is_uncensored("ABP-358", "ABP").unwrap());
    assert!(!is_uncensored("SNIS-829", "SNIS").unwrap());

    reset_prefix_matcher();
    assert!(!is_uncensored("ABP-358", &ParserConfig::default()).unwrap());
    assert!(is_uncensored("SKYHD-001", &ParserConfig::default()).unwrap());
}
