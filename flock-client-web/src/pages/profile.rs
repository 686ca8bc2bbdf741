use flock_core::{ProfileEditor, ProfileField, UserProfile};
use yew::prelude::*;

use crate::components::BioCard;
use crate::log_info;

#[derive(Properties, PartialEq)]
pub struct ProfilePageProps {
    pub profile: UserProfile,
}

/// La pagina possiede profilo confermato e bozza; la BioCard li mostra soltanto.
#[function_component(ProfilePage)]
pub fn profile_page(props: &ProfilePageProps) -> Html {
    let editor = use_mut_ref(|| ProfileEditor::new(props.profile.clone()));
    let redraw = use_force_update();

    let on_edit = {
        let editor = editor.clone();
        let redraw = redraw.clone();
        Callback::from(move |_: MouseEvent| {
            editor.borrow_mut().begin_edit();
            redraw.force_update();
        })
    };
    let on_change = {
        let editor = editor.clone();
        let redraw = redraw.clone();
        Callback::from(move |(field, value): (ProfileField, String)| {
            editor.borrow_mut().on_field_change(field, value);
            redraw.force_update();
        })
    };
    let on_save = {
        let editor = editor.clone();
        let redraw = redraw.clone();
        Callback::from(move |_: ()| {
            // nessun endpoint di salvataggio: il profilo resta in memoria
            let name = editor.borrow_mut().on_save().name.clone();
            log_info(&format!("profile saved: {name}"));
            redraw.force_update();
        })
    };
    let on_cancel = {
        let editor = editor.clone();
        let redraw = redraw.clone();
        Callback::from(move |_: ()| {
            editor.borrow_mut().on_cancel();
            redraw.force_update();
        })
    };

    let e = editor.borrow();
    let edited_user = e.draft().cloned().unwrap_or_else(|| e.committed().clone());

    html! {
        <div class="profile-page">
            <BioCard
                is_editing={e.is_editing()}
                user={e.committed().clone()}
                {edited_user}
                {on_change}
                {on_save}
                {on_cancel}
            />
            if !e.is_editing() {
                <button onclick={on_edit}>{ "Edit profile" }</button>
            }
        </div>
    }
}
