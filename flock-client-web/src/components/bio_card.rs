use flock_core::{ProfileField, UserProfile};
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct BioCardProps {
    pub is_editing: bool,
    /// Profilo mostrato in lettura.
    pub user: UserProfile,
    /// Bozza mostrata nel form.
    pub edited_user: UserProfile,
    pub on_change: Callback<(ProfileField, String)>,
    pub on_save: Callback<()>,
    pub on_cancel: Callback<()>,
}

/// Vista controllata: nessuno stato proprio, tutto arriva dal genitore.
#[function_component(BioCard)]
pub fn bio_card(props: &BioCardProps) -> Html {
    if !props.is_editing {
        let user = &props.user;
        return html! {
            <div class="bio-card-container">
                <p>{ user.bio.clone() }</p>
                <br />
                <p><span class="bold-bio">{ "Name:" }</span>{ " " }{ user.name.clone() }</p>
                <p><span class="bold-bio">{ "Email:" }</span>{ " " }{ user.email.clone() }</p>
            </div>
        };
    }

    let input_changed = |field: ProfileField| {
        let on_change = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_change.emit((field, input.value()));
        })
    };
    let on_bio = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            on_change.emit((ProfileField::Bio, input.value()));
        })
    };
    let on_save = props.on_save.reform(|_: MouseEvent| ());
    let on_cancel = props.on_cancel.reform(|_: MouseEvent| ());
    let draft = &props.edited_user;

    html! {
        <div class="bio-card-container">
            <label>{ "Name:" }</label>
            <input
                type="text"
                name={ProfileField::Name.as_str()}
                value={draft.name.clone()}
                oninput={input_changed(ProfileField::Name)}
            />

            <label>{ "Email:" }</label>
            <input
                type="email"
                name={ProfileField::Email.as_str()}
                value={draft.email.clone()}
                oninput={input_changed(ProfileField::Email)}
            />

            <label>{ "Bio:" }</label>
            <textarea name={ProfileField::Bio.as_str()} value={draft.bio.clone()} oninput={on_bio} />

            <button onclick={on_save}>{ "Save" }</button>
            <button onclick={on_cancel}>{ "Cancel" }</button>
        </div>
    }
}
