//! Command-level behaviour: every command's success and failure output.

mod common;

use common::{assistant_on, monday, say};

#[test]
fn test_hello() {
    let mut assistant = assistant_on(monday());
    assert_eq!(say(&mut assistant, "hello"), "How can I help you?");
    assert_eq!(say(&mut assistant, "HELLO"), "How can I help you?");
}

#[test]
fn test_add_then_all_round_trip() {
    let mut assistant = assistant_on(monday());
    assert_eq!(say(&mut assistant, "add John 1234567890"), "Contact added.");
    assert_eq!(say(&mut assistant, "all"), "John: 1234567890");
}

#[test]
fn test_add_argument_count() {
    let mut assistant = assistant_on(monday());
    assert_eq!(say(&mut assistant, "add John"), "Missing arguments");
    assert_eq!(say(&mut assistant, "add"), "Missing arguments");
    assert_eq!(
        say(&mut assistant, "add John 1234567890 extra"),
        "Missing arguments"
    );
    assert_eq!(say(&mut assistant, "all"), "No contacts stored.");
}

#[test]
fn test_add_invalid_phone() {
    let mut assistant = assistant_on(monday());
    assert_eq!(
        say(&mut assistant, "add John 12345"),
        "phone must be exactly 10 digits"
    );
    assert!(assistant.book().find("John").is_none());
}

#[test]
fn test_change() {
    let mut assistant = assistant_on(monday());
    say(&mut assistant, "add John 1234567890");

    assert_eq!(say(&mut assistant, "change John 0987654321"), "Contact updated.");
    assert_eq!(say(&mut assistant, "phone John"), "0987654321");

    assert_eq!(say(&mut assistant, "change Jane 0987654321"), "Not found.");
    assert_eq!(
        say(&mut assistant, "change John 0987"),
        "phone must be exactly 10 digits"
    );
    assert_eq!(say(&mut assistant, "change John"), "Missing arguments");
}

#[test]
fn test_phone_lists_all_numbers() {
    let mut assistant = assistant_on(monday());
    say(&mut assistant, "add John 1234567890");
    assistant
        .book_mut()
        .find_mut("John")
        .unwrap()
        .add_phone("5555555555")
        .unwrap();

    assert_eq!(say(&mut assistant, "phone John"), "1234567890, 5555555555");
    assert_eq!(say(&mut assistant, "all"), "John: 1234567890, 5555555555");
}

#[test]
fn test_phone_not_found() {
    let mut assistant = assistant_on(monday());
    assert_eq!(say(&mut assistant, "phone Ghost"), "Not found.");
    assert_eq!(say(&mut assistant, "phone"), "Missing arguments");
}

#[test]
fn test_all_keeps_insertion_order() {
    let mut assistant = assistant_on(monday());
    say(&mut assistant, "add Zed 1111111111");
    say(&mut assistant, "add Amy 2222222222");
    say(&mut assistant, "add Bob 3333333333");

    assert_eq!(
        say(&mut assistant, "all"),
        "Zed: 1111111111\nAmy: 2222222222\nBob: 3333333333"
    );
}

#[test]
fn test_add_and_show_birthday() {
    let mut assistant = assistant_on(monday());
    say(&mut assistant, "add John 1234567890");

    assert_eq!(
        say(&mut assistant, "show-birthday John"),
        "No birthday found for this contact."
    );
    assert_eq!(say(&mut assistant, "add-birthday John 15.06.2000"), "Birthday added.");
    assert_eq!(say(&mut assistant, "show-birthday John"), "15.06.2000");

    assert_eq!(say(&mut assistant, "add-birthday John 16.06.2001"), "Birthday added.");
    assert_eq!(say(&mut assistant, "show-birthday John"), "16.06.2001");
}

#[test]
fn test_add_birthday_failures() {
    let mut assistant = assistant_on(monday());
    say(&mut assistant, "add John 1234567890");

    assert_eq!(
        say(&mut assistant, "add-birthday Ghost 15.06.2000"),
        "Contact not found."
    );
    assert_eq!(
        say(&mut assistant, "add-birthday John 2000-06-15"),
        "birthday must match DD.MM.YYYY"
    );
    assert_eq!(
        say(&mut assistant, "add-birthday John 31.02.2024"),
        "birthday must match DD.MM.YYYY"
    );
    assert_eq!(
        say(&mut assistant, "add-birthday John 01.01.0000"),
        "birthday must match DD.MM.YYYY"
    );
    assert_eq!(say(&mut assistant, "add-birthday John"), "Missing arguments");
    assert_eq!(
        say(&mut assistant, "show-birthday Ghost"),
        "No birthday found for this contact."
    );
}

#[test]
fn test_birthdays_command() {
    let mut assistant = assistant_on(monday());
    assert_eq!(say(&mut assistant, "birthdays"), "No birthdays next week.");

    say(&mut assistant, "add Anna 1111111111");
    say(&mut assistant, "add-birthday Anna 15.06.2000");
    say(&mut assistant, "add Bob 2222222222");
    say(&mut assistant, "add-birthday Bob 11.06.1990");
    say(&mut assistant, "add Carl 3333333333");
    say(&mut assistant, "add-birthday Carl 20.06.1990");

    assert_eq!(say(&mut assistant, "birthdays"), "Monday: Anna\nTuesday: Bob");
}

#[test]
fn test_unknown_command() {
    let mut assistant = assistant_on(monday());
    assert_eq!(
        say(&mut assistant, "frobnicate"),
        "Command 'frobnicate' not recognized"
    );
    assert_eq!(
        say(&mut assistant, "delete John"),
        "Command 'delete' not recognized"
    );
}

#[test]
fn test_close_and_exit() {
    let mut assistant = assistant_on(monday());
    for word in ["close", "exit", "Exit"] {
        let reply = assistant.handle_line(word).unwrap();
        assert_eq!(reply.text, "Good bye!");
        assert!(reply.exit);
    }
    assert!(!assistant.handle_line("hello").unwrap().exit);
}

#[test]
fn test_blank_line_has_no_reply() {
    let mut assistant = assistant_on(monday());
    assert!(assistant.handle_line("   ").is_none());
}
