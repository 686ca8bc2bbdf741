//! Pagina di un hub: lista dei post, form di creazione, spazio per il carosello eventi.

use flock_core::{
    FixedIdentity, HubBoard, HubSelection, LoadOutcome, LoadState, PostsApi, SubmitOutcome,
};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::api::GlooPostsApi;
use crate::{log_error, show_alert};

#[derive(Properties, PartialEq)]
pub struct SingleHubProps {
    pub selection: HubSelection,
}

#[function_component(SingleHub)]
pub fn single_hub(props: &SingleHubProps) -> Html {
    let board = use_mut_ref(|| HubBoard::new(props.selection.clone()));
    let redraw = use_force_update();
    let api = use_context::<GlooPostsApi>().unwrap_or_default();
    let identity = use_context::<FixedIdentity>().unwrap_or_else(FixedIdentity::anonymous);

    // carica al mount e a ogni cambio di hub; vince sempre l'ultima richiesta
    {
        let board = board.clone();
        let redraw = redraw.clone();
        let api = api.clone();
        use_effect_with(props.selection.clone(), move |selection| {
            let ticket = {
                let mut b = board.borrow_mut();
                match b.navigate(selection.clone()) {
                    Some(ticket) => Some(ticket),
                    None if matches!(b.state(), LoadState::Idle) => Some(b.begin_load()),
                    None => None,
                }
            };
            redraw.force_update();
            if let Some(ticket) = ticket {
                spawn_local(async move {
                    let result = api.fetch_posts(ticket.query()).await;
                    let outcome = board.borrow_mut().finish_load(ticket, result);
                    if let LoadOutcome::Failed(error) = outcome {
                        log_error(&format!("Failed to fetch posts: {error}"));
                    }
                    redraw.force_update();
                });
            }
            || ()
        });
    }

    let on_title = {
        let board = board.clone();
        let redraw = redraw.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            board.borrow_mut().set_draft_title(input.value());
            redraw.force_update();
        })
    };

    let on_body = {
        let board = board.clone();
        let redraw = redraw.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            board.borrow_mut().set_draft_body(input.value());
            redraw.force_update();
        })
    };

    let on_submit = {
        let board = board.clone();
        let redraw = redraw.clone();
        Callback::from(move |_: MouseEvent| {
            let ticket = board.borrow_mut().begin_submit(&identity);
            let ticket = match ticket {
                Ok(ticket) => ticket,
                Err(error) => {
                    log_error(&format!("Error creating post: {error}"));
                    show_alert(error.alert());
                    return;
                }
            };
            redraw.force_update();
            let board = board.clone();
            let redraw = redraw.clone();
            let api = api.clone();
            spawn_local(async move {
                let result = api.create_post(ticket.request()).await;
                let outcome = board.borrow_mut().finish_submit(ticket, result);
                redraw.force_update();
                if let SubmitOutcome::Failed { error, alert } = outcome {
                    log_error(&format!("Error creating post: {error}"));
                    show_alert(alert);
                }
            });
        })
    };

    let b = board.borrow();
    let selection = b.selection();
    let background = selection.color.as_ref().map(|c| format!("background-color: {c}"));
    let status = match b.state() {
        LoadState::Empty => html! { <p class="board-status">{ "No posts yet" }</p> },
        LoadState::Failed(_) => html! { <p class="board-status">{ "Could not load posts" }</p> },
        _ => html! {},
    };

    html! {
        <div class="page-container">
            <div class="forum-container" style={background}>
                <div class="title-container">
                    <p class="hub-name">{ selection.title.clone().unwrap_or_default() }</p>
                </div>
                <div class="board-container">
                    <div class="scroll-container">
                        <div class="forum-board">
                            { status }
                            { for b.posts().iter().map(|post| html! {
                                <div key={post.post_id.clone()} class="post">
                                    <h2>{ post.title.clone() }</h2>
                                    <p>{ post.text.clone() }</p>
                                </div>
                            }) }
                        </div>
                    </div>
                    <div class="post-creator">
                        <div class="input-container">
                            <div class="title-button-container">
                                <input
                                    class="title-box"
                                    type="text"
                                    placeholder="Post title"
                                    value={b.draft_title().to_string()}
                                    oninput={on_title}
                                />
                                <button class="submit-button" onclick={on_submit} disabled={b.is_submitting()}>
                                    { "Post" }
                                </button>
                            </div>
                            <textarea
                                class="body-input-box"
                                placeholder="Write your post..."
                                rows="4"
                                value={b.draft_body().to_string()}
                                oninput={on_body}
                            />
                        </div>
                    </div>
                </div>
            </div>
            <div class="event-carousel-logo">
                <p class="flock-logo">{ "FLOCK" }</p>
                // il carosello eventi è un componente esterno, qui solo il segnaposto
                <div class="event-carousel" data-hub-id={b.hub_id().to_string()} />
            </div>
        </div>
    }
}
