//! Contact details and the inquiry form.
//!
//! ERROR HANDLING
//! ==============
//! Every failure (missing relay configuration, network error, non-2xx
//! reply) ends in the same generic alert and leaves the typed form intact.
//! Success shows a confirmation alert and clears the form.

use leptos::prelude::*;

use crate::app::Site;
use crate::config::RelayConfig;
use crate::content::ARTIST;
use crate::state::contact::{CONTACT_FORM_ID, ContactForm, ContactState};

#[component]
pub fn Contact() -> impl IntoView {
    let site = expect_context::<Site>();
    let contact = expect_context::<RwSignal<ContactState>>();
    let relay = site.config.relay.clone();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if !contact.try_update(ContactState::begin_send).unwrap_or(false) {
            return;
        }
        let form = contact.with_untracked(|state| state.form.clone());
        submit(contact, relay.clone(), form);
    };

    let sending = move || contact.with(|state| state.sending);

    view! {
        <section id="contact" class="contact">
            <div class="contact__inner">
                <div class="contact__details">
                    <div class="section-heading section-heading--left">
                        <p class="section-heading__eyebrow">"Communication"</p>
                        <h3>"문의하기"</h3>
                    </div>
                    <dl>
                        <dt>"Email"</dt>
                        <dd>
                            <a href=format!("mailto:{}", ARTIST.email)>{ARTIST.email}</a>
                        </dd>
                        <dt>"Social"</dt>
                        <dd>
                            <a href=ARTIST.instagram_url target="_blank" rel="noopener noreferrer">
                                {ARTIST.instagram_id}
                            </a>
                        </dd>
                        <dt>"Address"</dt>
                        <dd>{ARTIST.address}</dd>
                    </dl>
                </div>
                <form id=CONTACT_FORM_ID class="contact__form" on:submit=on_submit>
                    <div class="contact__row">
                        <input
                            type="text"
                            placeholder="성함"
                            required
                            prop:value=move || contact.with(|state| state.form.name.clone())
                            on:input=move |ev| contact.update(|state| state.form.name = event_target_value(&ev))
                        />
                        <input
                            type="email"
                            placeholder="이메일"
                            required
                            prop:value=move || contact.with(|state| state.form.email.clone())
                            on:input=move |ev| contact.update(|state| state.form.email = event_target_value(&ev))
                        />
                    </div>
                    <input
                        type="tel"
                        placeholder="연락처"
                        required
                        prop:value=move || contact.with(|state| state.form.phone.clone())
                        on:input=move |ev| contact.update(|state| state.form.phone = event_target_value(&ev))
                    />
                    <textarea
                        rows="6"
                        placeholder="내용을 입력해주세요"
                        required
                        prop:value=move || contact.with(|state| state.form.message.clone())
                        on:input=move |ev| contact.update(|state| state.form.message = event_target_value(&ev))
                    ></textarea>
                    <button type="submit" class="contact__submit" disabled=sending>
                        {move || if sending() { "Sending..." } else { "메시지 보내기" }}
                    </button>
                </form>
            </div>
        </section>
    }
}

/// Send `form` through the relay and report the outcome.
#[cfg_attr(not(feature = "csr"), allow(unused_variables))]
fn submit(contact: RwSignal<ContactState>, relay: Option<RelayConfig>, form: ContactForm) {
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        use crate::state::contact::{SEND_FAILED_ALERT, SEND_SUCCEEDED_ALERT};
        use crate::util::dom;

        match crate::net::contact::send_contact(relay.as_ref(), &form).await {
            Ok(()) => {
                contact.update(|state| state.finish_send(true));
                dom::alert(SEND_SUCCEEDED_ALERT);
            }
            Err(err) => {
                leptos::logging::warn!("contact submission failed: {err}");
                contact.update(|state| state.finish_send(false));
                dom::alert(SEND_FAILED_ALERT);
            }
        }
    });
    #[cfg(not(feature = "csr"))]
    contact.update(|state| state.finish_send(false));
}
