use leptos::{ev::SubmitEvent, html, prelude::*, task::spawn_local};

use super::{
    motion::{motion_style, use_scroll_progress},
    SectionHeading,
};
use crate::{
    config::SITE_CONFIG,
    content::PROFILE,
    mailer::{deliver, EmailJs, EmailPayload},
    state::{ContactField, FormState, MotionPreset, ScrollRange, SubmissionStatus},
};

#[component]
pub fn ContactSection() -> impl IntoView {
    let node = NodeRef::<html::Section>::new();
    let progress = use_scroll_progress(node, ScrollRange::EntryToExit);

    let form = RwSignal::new(FormState::default());

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        // a refusal surfaces through `FormState::validation_message`
        let Some(Ok(snapshot)) = form.try_update(FormState::begin_submit) else {
            return;
        };
        spawn_local(async move {
            let config = &SITE_CONFIG.emailjs;
            let outcome = deliver(
                &EmailJs::new(config.clone()),
                config,
                &EmailPayload::from(snapshot),
            )
            .await;
            if form.try_update(|f| f.resolve(outcome)).is_none() {
                log::debug!("contact section unmounted before the send settled");
            }
        });
    };

    let submitting = move || form.with(FormState::is_submitting);
    let status_class = move || match form.with(FormState::status) {
        SubmissionStatus::Success => "rounded-lg bg-green-500/10 p-3 text-sm text-green-600",
        SubmissionStatus::Error => "rounded-lg bg-red-500/10 p-3 text-sm text-red-600",
        _ => "hidden",
    };

    view! {
        <section id="contact" node_ref=node class="relative py-20 md:py-28">
            <div
                class="container mx-auto max-w-6xl px-4"
                style=motion_style(progress, MotionPreset::fade_rise())
            >
                <SectionHeading eyebrow="Contact" title="Get in touch" />
                <div class="grid gap-12 md:grid-cols-5">
                    <div class="space-y-6 md:col-span-2">
                        <p class="text-muted-foreground">
                            "Have a project in mind or just want to say hi? My inbox is open."
                        </p>
                        <ContactInfo label="Email" value=PROFILE.email.clone() href=PROFILE.mailto() />
                        <ContactInfo label="Phone" value=PROFILE.phone.clone() href=PROFILE.tel() />
                        <div>
                            <div class="text-sm text-muted-foreground">"Location"</div>
                            <div class="font-medium">{PROFILE.location.clone()}</div>
                        </div>
                    </div>
                    <form class="space-y-4 md:col-span-3" on:submit=on_submit novalidate=true>
                        <div class="grid gap-4 sm:grid-cols-2">
                            <FormField form field=ContactField::Name label="Name" kind="text" />
                            <FormField form field=ContactField::Email label="Email" kind="email" />
                        </div>
                        <div class="grid gap-4 sm:grid-cols-2">
                            <FormField form field=ContactField::Phone label="Phone" kind="tel" />
                            <FormField form field=ContactField::Subject label="Subject" kind="text" />
                        </div>
                        <FormField form field=ContactField::Message label="Message" kind="textarea" />
                        {move || {
                            form
                                .with(FormState::validation_message)
                                .map(|msg| view! { <p class="text-sm text-red-600">{msg}</p> })
                        }}
                        <p class=status_class>
                            {move || form.with(|f| f.message().map(str::to_string))}
                        </p>
                        <button
                            type="submit"
                            class="w-full rounded-full bg-primary px-6 py-3 font-medium text-primary-foreground hover:opacity-90 disabled:opacity-60"
                            disabled=submitting
                        >
                            {move || if submitting() { "Sending..." } else { "Send Message" }}
                        </button>
                    </form>
                </div>
            </div>
        </section>
    }
}

#[component]
fn ContactInfo(label: &'static str, value: String, href: String) -> impl IntoView {
    view! {
        <div>
            <div class="text-sm text-muted-foreground">{label}</div>
            <a href=href class="font-medium hover:text-primary">
                {value}
            </a>
        </div>
    }
}

#[component]
fn FormField(
    form: RwSignal<FormState>,
    field: ContactField,
    label: &'static str,
    kind: &'static str,
) -> impl IntoView {
    let value = move || form.with(|f| f.fields().get(field).to_string());
    let disabled = move || form.with(FormState::is_submitting);
    let label = if field.is_required() {
        format!("{label} *")
    } else {
        label.to_string()
    };
    let input_class = "w-full rounded-lg border border-border bg-background px-4 py-2 focus:outline-none focus:ring-2 focus:ring-primary";

    view! {
        <label class="block space-y-1">
            <span class="text-sm font-medium">{label}</span>
            {if kind == "textarea" {
                view! {
                    <textarea
                        name=field.name()
                        rows="5"
                        class=input_class
                        required=field.is_required()
                        disabled=disabled
                        prop:value=value
                        on:input=move |ev| form.update(|f| f.edit(field, event_target_value(&ev)))
                    ></textarea>
                }
                    .into_any()
            } else {
                view! {
                    <input
                        type=kind
                        name=field.name()
                        class=input_class
                        required=field.is_required()
                        disabled=disabled
                        prop:value=value
                        on:input=move |ev| form.update(|f| f.edit(field, event_target_value(&ev)))
                    />
                }
                    .into_any()
            }}
        </label>
    }
}
