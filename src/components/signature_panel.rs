//! Signature Panel Component
//!
//! Comments and signatures at the foot of the inventory sheet.

use leptos::prelude::*;

use crate::models::{SignatureData, SignatureField};

#[component]
pub fn SignaturePanel(signature: RwSignal<SignatureData>) -> impl IntoView {
    view! {
        <div class="signature-panel">
            <div class="signature-column">
                <h3>"藥師建議事項"</h3>
                <SignatureComments signature=signature field=SignatureField::PharmacistComments placeholder="請輸入建議或觀察..." />
                <div class="signature-row">
                    <SignatureInput signature=signature field=SignatureField::PharmacistId label="藥師員工代號" placeholder="請簽名" />
                    <SignatureInput signature=signature field=SignatureField::Date label="日期" input_type="date" />
                </div>
            </div>
            <div class="signature-column">
                <h3>"相關單位意見"</h3>
                <SignatureComments signature=signature field=SignatureField::UnitComments placeholder="單位回饋意見..." />
                <div class="signature-row">
                    <SignatureInput signature=signature field=SignatureField::HeadNurseName label="護理長簽名" placeholder="請簽名" />
                </div>
            </div>
        </div>
    }
}

#[component]
fn SignatureInput(
    signature: RwSignal<SignatureData>,
    field: SignatureField,
    label: &'static str,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(optional)] placeholder: &'static str,
) -> impl IntoView {
    view! {
        <div class="signature-field">
            <label>{label}</label>
            <input
                type=input_type
                name=field.as_str()
                placeholder=placeholder
                prop:value=move || signature.with(|s| s.field(field).to_string())
                on:input=move |ev| signature.update(|s| s.set_field(field, event_target_value(&ev)))
            />
        </div>
    }
}

#[component]
fn SignatureComments(
    signature: RwSignal<SignatureData>,
    field: SignatureField,
    placeholder: &'static str,
) -> impl IntoView {
    view! {
        <textarea
            class="signature-comments"
            name=field.as_str()
            placeholder=placeholder
            prop:value=move || signature.with(|s| s.field(field).to_string())
            on:input=move |ev| signature.update(|s| s.set_field(field, event_target_value(&ev)))
        ></textarea>
    }
}
