use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{HtmlElement, TouchEvent, WheelEvent};
use yew::prelude::*;

use super::{hint_overlay::HintOverlay, page_panel::PagePanel, spread_counter::SpreadCounter};
use crate::model::{
    BookAction, BookState, FLIP_DURATION_MS, FlipDirection, swipe_intent, wheel_intent,
};
use crate::state::{FlipTimer, TouchState};
use crate::util::clog;

#[derive(Properties, PartialEq, Clone)]
pub struct BookViewProps {
    pub book: UseReducerHandle<BookState>,
    pub show_hint: bool,
    pub dismiss_hint: Callback<()>,
}

#[function_component(BookView)]
pub fn book_view(props: &BookViewProps) -> Html {
    let container_ref = use_node_ref();
    let touch_state = use_mut_ref(TouchState::default);
    let flip_timer = use_mut_ref(FlipTimer::default);
    let book_ref = use_mut_ref(|| props.book.clone());

    // Effect: keep book_ref pointing at the latest handle so the raw DOM
    // listeners registered below never read a stale snapshot.
    {
        let book_ref = book_ref.clone();
        let current = props.book.clone();
        let deps = (props.book.spread, props.book.flipping);
        use_effect_with(deps, move |_| {
            *book_ref.borrow_mut() = current;
            || ()
        });
    }

    // Effect: log spread changes
    {
        let spread = props.book.spread;
        let total = props.book.spread_count();
        use_effect_with(spread, move |_| {
            clog(&format!("spread: {} of {}", spread + 1, total));
            || ()
        });
    }

    // Effect: register wheel/touch listeners for the view's lifetime.
    {
        let container_ref = container_ref.clone();
        let book_ref = book_ref.clone();
        let touch_state = touch_state.clone();
        let flip_timer = flip_timer.clone();
        use_effect_with((), move |_| {
            let window = web_sys::window().expect("no global `window` exists");
            let container: HtmlElement = container_ref
                .cast::<HtmlElement>()
                .expect("container_ref not attached to an element");

            // Shared by the wheel and touch-end handlers: accept or discard
            // an intent, and on accept schedule the one-shot completion that
            // moves the spread index once the CSS transition has run.
            let begin_flip: Rc<dyn Fn(FlipDirection)> = {
                let window = window.clone();
                let book_ref = book_ref.clone();
                let flip_timer = flip_timer.clone();
                Rc::new(move |dir| {
                    if flip_timer.borrow().busy {
                        return;
                    }
                    let handle = book_ref.borrow().clone();
                    if !handle.accepts(dir) {
                        return;
                    }
                    handle.dispatch(BookAction::BeginFlip(dir));
                    let done = {
                        let book_ref = book_ref.clone();
                        let flip_timer = flip_timer.clone();
                        Closure::wrap(Box::new(move || {
                            let handle = book_ref.borrow().clone();
                            handle.dispatch(BookAction::CompleteFlip);
                            let mut timer = flip_timer.borrow_mut();
                            timer.busy = false;
                            timer.timeout_id = None;
                            // pending stays set; dropping the running closure
                            // from inside itself is not allowed. The next
                            // accepted flip (or unmount) replaces it.
                        }) as Box<dyn FnMut()>)
                    };
                    let id = window
                        .set_timeout_with_callback_and_timeout_and_arguments_0(
                            done.as_ref().unchecked_ref(),
                            FLIP_DURATION_MS,
                        )
                        .unwrap();
                    let mut timer = flip_timer.borrow_mut();
                    timer.busy = true;
                    timer.timeout_id = Some(id);
                    timer.pending = Some(done);
                })
            };

            let wheel_cb = {
                let begin_flip = begin_flip.clone();
                Closure::wrap(Box::new(move |e: WheelEvent| {
                    // Default scroll is suppressed whether or not the event
                    // produces an accepted intent.
                    e.prevent_default();
                    if let Some(dir) = wheel_intent(e.delta_y()) {
                        begin_flip(dir);
                    }
                }) as Box<dyn FnMut(_)>)
            };
            container
                .add_event_listener_with_callback("wheel", wheel_cb.as_ref().unchecked_ref())
                .ok();

            let touch_start_cb = {
                let touch_state = touch_state.clone();
                Closure::wrap(Box::new(move |e: TouchEvent| {
                    if let Some(t0) = e.touches().get(0) {
                        let mut ts = touch_state.borrow_mut();
                        ts.start_x = t0.client_x() as f64;
                        ts.start_y = t0.client_y() as f64;
                        ts.tracking = true;
                    }
                }) as Box<dyn FnMut(_)>)
            };
            container
                .add_event_listener_with_callback(
                    "touchstart",
                    touch_start_cb.as_ref().unchecked_ref(),
                )
                .ok();

            let touch_end_cb = {
                let touch_state = touch_state.clone();
                let begin_flip = begin_flip.clone();
                Closure::wrap(Box::new(move |e: TouchEvent| {
                    let mut ts = touch_state.borrow_mut();
                    if !ts.tracking {
                        return;
                    }
                    ts.tracking = false;
                    let Some(t0) = e.changed_touches().get(0) else {
                        return;
                    };
                    let dx = ts.start_x - t0.client_x() as f64;
                    let dy = ts.start_y - t0.client_y() as f64;
                    drop(ts);
                    if let Some(dir) = swipe_intent(dx, dy) {
                        begin_flip(dir);
                    }
                }) as Box<dyn FnMut(_)>)
            };
            container
                .add_event_listener_with_callback(
                    "touchend",
                    touch_end_cb.as_ref().unchecked_ref(),
                )
                .ok();

            // Cleanup: deregister everything and cancel a pending flip so a
            // late timer can never dispatch into a torn-down view.
            move || {
                let _ = container.remove_event_listener_with_callback(
                    "wheel",
                    wheel_cb.as_ref().unchecked_ref(),
                );
                let _ = container.remove_event_listener_with_callback(
                    "touchstart",
                    touch_start_cb.as_ref().unchecked_ref(),
                );
                let _ = container.remove_event_listener_with_callback(
                    "touchend",
                    touch_end_cb.as_ref().unchecked_ref(),
                );
                flip_timer.borrow_mut().clear(&window);
                drop(wheel_cb);
                drop(touch_start_cb);
                drop(touch_end_cb);
            }
        });
    }

    let book = &props.book;
    let flipping = book.flipping.is_some();
    let total = book.spread_count();

    let page_size = "width:min(45vw, 450px); height:min(60vw, 600px);";
    let paper = "background:linear-gradient(135deg, #fffbeb, #fef3c7);";
    let face = "position:absolute; inset:0; backface-visibility:hidden; -webkit-backface-visibility:hidden;";
    let shade_left =
        "position:absolute; inset:0; background:linear-gradient(to left, rgba(0,0,0,0.05), transparent); pointer-events:none;";
    let shade_right =
        "position:absolute; inset:0; background:linear-gradient(to right, rgba(0,0,0,0.05), transparent); pointer-events:none;";

    // Spread 0 shows the cover on the left static face instead of a page.
    let left_face = if book.spread == 0 {
        html! {
            <div style="width:100%; height:100%; display:flex; align-items:center; justify-content:center; padding:16px; box-sizing:border-box;">
                <div style="text-align:center;">
                    <h1 style="font-size:40px; font-family:Georgia, serif; color:#1f2937; margin:0 0 16px 0;">{"The Book"}</h1>
                    <p style="font-size:15px; color:#4b5563; font-style:italic; margin:0;">{"Scroll to begin"}</p>
                </div>
            </div>
        }
    } else {
        html! { <PagePanel page={book.left_page().cloned()} /> }
    };

    let leaf_style = format!(
        "position:absolute; left:0; top:0; width:100%; height:100%; {paper} \
         transform-style:preserve-3d; transform-origin:left center; \
         transition:transform 1s cubic-bezier(0.645, 0.045, 0.355, 1); transform:{}; \
         box-shadow:5px 5px 20px rgba(0,0,0,0.3); z-index:20;",
        if flipping {
            "rotateY(-180deg)"
        } else {
            "rotateY(0deg)"
        }
    );

    html! {
        <div
            ref={container_ref}
            style="position:relative; height:100vh; width:100vw; background:linear-gradient(to bottom, #334155, #475569, #1e293b); overflow:hidden; display:flex; align-items:center; justify-content:center; padding:24px; box-sizing:border-box;"
        >
            <div style="position:relative; width:100%; max-width:960px; perspective:2000px;">
                <div style="position:relative; display:flex; justify-content:center; transform-style:preserve-3d;">
                    // Spine shadow
                    <div style="position:absolute; left:50%; top:0; width:2px; height:100%; background:linear-gradient(to right, rgba(0,0,0,0.4), rgba(0,0,0,0.2), transparent); transform:translateX(-50%); z-index:10;"/>

                    // Left page, static
                    <div style={format!("position:relative; {page_size} {paper} transform-style:preserve-3d; transform:rotateY(0deg); box-shadow:-5px 5px 20px rgba(0,0,0,0.3), inset 3px 0 10px rgba(0,0,0,0.1);")}>
                        <div style={shade_left}/>
                        { left_face }
                    </div>

                    // Right page stack
                    <div style={format!("position:relative; {page_size}")}>
                        // Flipping leaf; keyed by spread so a completed turn
                        // swaps content without animating back.
                        <div key={book.spread.to_string()} style={leaf_style}>
                            <div style={face}>
                                <div style={shade_right}/>
                                <PagePanel page={book.flip_front().cloned()} />
                            </div>
                            <div style={format!("{face} transform:rotateY(180deg);")}>
                                <div style={shade_left}/>
                                <PagePanel page={book.flip_back().cloned()} />
                            </div>
                        </div>

                        // Static right page underneath
                        <div style={format!("position:absolute; left:0; top:0; width:100%; height:100%; {paper} box-shadow:5px 5px 20px rgba(0,0,0,0.3), inset -3px 0 10px rgba(0,0,0,0.1); z-index:10;")}>
                            <div style={shade_right}/>
                            <PagePanel page={book.right_under().cloned()} />
                        </div>
                    </div>
                </div>

                // Book bottom edge
                <div style="position:absolute; bottom:0; left:50%; transform:translate(-50%, 100%); height:10px; width:min(90vw, 900px); background:linear-gradient(to bottom, transparent, rgba(0,0,0,0.3));"/>
            </div>

            <HintOverlay show={props.show_hint} dismiss={props.dismiss_hint.clone()} />
            <SpreadCounter spread={book.spread} total={total} />
        </div>
    }
}
