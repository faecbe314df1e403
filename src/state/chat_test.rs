use super::*;

#[test]
fn greeting_is_seeded_once() {
    let mut chat = ChatState::default();
    chat.seed_greeting("hello");
    chat.seed_greeting("hello again");
    assert_eq!(chat.messages.len(), 1);
    assert_eq!(chat.messages[0].text, "hello");
    assert_eq!(chat.messages[0].role, ChatRole::Model);
}

#[test]
fn begin_send_appends_user_message_and_placeholder() {
    let mut chat = ChatState::default();
    let (text, placeholder_id) = chat.begin_send("  help me  ", true).unwrap();
    assert_eq!(text, "help me");
    assert_eq!(chat.messages.len(), 2);
    assert_eq!(chat.messages[0].role, ChatRole::User);
    assert_eq!(chat.messages[0].text, "help me");
    assert_eq!(chat.messages[1].id, placeholder_id);
    assert_eq!(chat.messages[1].role, ChatRole::Model);
    assert!(chat.messages[1].text.is_empty());
    assert!(chat.sending);
}

#[test]
fn blank_input_is_a_no_op() {
    let mut chat = ChatState::default();
    assert!(chat.begin_send("   ", true).is_none());
    assert!(chat.messages.is_empty());
}

#[test]
fn missing_session_is_a_no_op() {
    let mut chat = ChatState::default();
    assert!(chat.begin_send("hi", false).is_none());
    assert!(chat.messages.is_empty());
}

#[test]
fn send_while_in_flight_is_a_no_op() {
    let mut chat = ChatState::default();
    chat.begin_send("first", true).unwrap();
    let len_before = chat.messages.len();

    assert!(chat.begin_send("second", true).is_none());
    assert_eq!(chat.messages.len(), len_before);
}

#[test]
fn fragments_grow_a_single_message_in_place() {
    let mut chat = ChatState::default();
    let (_, placeholder_id) = chat.begin_send("hi", true).unwrap();

    chat.append_fragment(&placeholder_id, "Hel");
    chat.append_fragment(&placeholder_id, "lo");
    chat.finish_send();

    // One user message plus exactly one model message reading "Hello".
    assert_eq!(chat.messages.len(), 2);
    let model = &chat.messages[1];
    assert_eq!(model.id, placeholder_id);
    assert_eq!(model.text, "Hello");
    assert!(!chat.sending);
}

#[test]
fn fragment_for_unknown_id_is_ignored() {
    let mut chat = ChatState::default();
    chat.begin_send("hi", true).unwrap();
    chat.append_fragment("nope", "lost");
    assert!(chat.messages.iter().all(|m| m.text != "lost"));
}

#[test]
fn fail_send_drops_empty_placeholder_and_appends_error() {
    let mut chat = ChatState::default();
    let (_, placeholder_id) = chat.begin_send("hi", true).unwrap();

    chat.fail_send(&placeholder_id, "something broke");
    assert!(!chat.sending);
    assert_eq!(chat.messages.len(), 2);
    let last = chat.messages.last().unwrap();
    assert_eq!(last.role, ChatRole::Error);
    assert_eq!(last.text, "something broke");
}

#[test]
fn fail_send_keeps_partially_streamed_text() {
    let mut chat = ChatState::default();
    let (_, placeholder_id) = chat.begin_send("hi", true).unwrap();
    chat.append_fragment(&placeholder_id, "partial");

    chat.fail_send(&placeholder_id, "broke");
    // Partial text survives alongside the error notice.
    assert!(chat.messages.iter().any(|m| m.text == "partial"));
    assert_eq!(chat.messages.last().unwrap().role, ChatRole::Error);
}

#[test]
fn reset_with_greeting_clears_and_regreets() {
    let mut chat = ChatState::default();
    chat.seed_greeting("hello");
    chat.begin_send("hi", true).unwrap();

    chat.reset_with_greeting("مرحبا");
    assert_eq!(chat.messages.len(), 1);
    assert_eq!(chat.messages[0].text, "مرحبا");
    assert!(!chat.sending);
    assert!(chat.started);
}
