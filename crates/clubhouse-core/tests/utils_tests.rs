use clubhouse_core::utils::{generate_id, generate_slug, mask_sensitive, unique_slug};

#[test]
fn test_generate_id() {
    let id1 = generate_id();
    let id2 = generate_id();

    // UUIDs should be different
    assert_ne!(id1, id2);

    // Should be valid UUIDs (version 4)
    assert_eq!(id1.get_version_num(), 4);
    assert_eq!(id2.get_version_num(), 4);
}

#[test]
fn test_generate_slug() {
    assert_eq!(generate_slug("Hello World"), "hello-world");
    assert_eq!(generate_slug("Hello, World!"), "hello-world");
    assert_eq!(generate_slug("  Intro to Rust: Part 2  "), "intro-to-rust-part-2");
    assert_eq!(generate_slug("test-123"), "test-123");
    assert_eq!(generate_slug("hello-world"), "hello-world");
}

#[test]
fn test_unique_slug() {
    assert_eq!(unique_slug("My Post", 0), "my-post");
    assert_eq!(unique_slug("My Post", 1), "my-post-1");
    assert_eq!(unique_slug("My Post", 7), "my-post-7");
}

#[test]
fn test_mask_sensitive() {
    // Short strings (8 chars or less) should be completely masked
    assert_eq!(mask_sensitive("short"), "***");
    assert_eq!(mask_sensitive("12345678"), "***");

    // Longer strings should show first 4 and last 4 chars
    assert_eq!(mask_sensitive("1234567890"), "1234***7890");
    assert_eq!(mask_sensitive("secretpassword123"), "secr***d123");

    // Empty string
    assert_eq!(mask_sensitive(""), "***");
}
