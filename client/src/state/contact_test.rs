use super::*;

fn record() -> ArtworkRecord {
    ArtworkRecord::from_line(0, "가을 틈│53.0x45.5cm│mixed media│2021.jpg")
}

#[test]
fn inquiry_names_title_size_and_year() {
    assert_eq!(
        inquiry_message(&record()),
        "안녕하세요. [가을 틈] 작품에 대한 소장 문의드립니다.\n(사이즈: 53.0x45.5cm / 제작년도: 2021)"
    );
}

#[test]
fn prefill_keeps_typed_contact_details() {
    let mut form = ContactForm { name: "김".into(), email: "a@b.c".into(), phone: "010".into(), message: "old".into() };
    form.prefill_inquiry(&record());
    assert_eq!(form.name, "김");
    assert_eq!(form.email, "a@b.c");
    assert!(form.message.starts_with("안녕하세요. [가을 틈]"));
}

#[test]
fn send_cannot_start_twice() {
    let mut state = ContactState::default();
    assert!(state.begin_send());
    assert!(!state.begin_send());
    assert!(state.sending);
}

#[test]
fn success_clears_the_form() {
    let mut state = ContactState { form: ContactForm { name: "n".into(), ..ContactForm::default() }, sending: true };
    state.finish_send(true);
    assert!(!state.sending);
    assert_eq!(state.form, ContactForm::default());
}

#[test]
fn failure_keeps_the_form() {
    let form = ContactForm { name: "n".into(), message: "hello".into(), ..ContactForm::default() };
    let mut state = ContactState { form: form.clone(), sending: true };
    state.finish_send(false);
    assert!(!state.sending);
    assert_eq!(state.form, form);
}
