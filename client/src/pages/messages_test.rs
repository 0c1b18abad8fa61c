use super::*;

#[test]
fn demo_threads_have_unique_ids_and_messages() {
    let threads = demo_threads();
    assert!(!threads.is_empty());
    let mut ids: Vec<usize> = threads.iter().map(|t| t.id).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), threads.len());
    for thread in &threads {
        assert!(!thread.messages.is_empty(), "{} thread is empty", thread.with);
    }
}

#[test]
fn validate_message_trims_and_rejects_blank() {
    assert_eq!(validate_message("  hello  "), Some("hello".to_owned()));
    assert_eq!(validate_message("   "), None);
    assert_eq!(validate_message(""), None);
}
