use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct HintOverlayProps {
    pub show: bool,
    pub dismiss: Callback<()>,
}

#[function_component(HintOverlay)]
pub fn hint_overlay(props: &HintOverlayProps) -> Html {
    if !props.show {
        return html! {};
    }
    let dismiss_cb = {
        let cb = props.dismiss.clone();
        Callback::from(move |_| cb.emit(()))
    };
    html! {
        <div style="position:absolute; top:24px; left:50%; transform:translateX(-50%); background:rgba(255,255,255,0.9); backdrop-filter:blur(4px); padding:10px 22px; border-radius:999px; font-size:13px; color:#374151; box-shadow:0 4px 12px rgba(0,0,0,0.25); display:flex; align-items:center; gap:12px;">
            <span style="font-weight:500;">{"Scroll or swipe to turn pages"}</span>
            <button onclick={dismiss_cb} style="border:none; background:none; cursor:pointer; font-size:13px; color:#6b7280; padding:0;">{"\u{2715}"}</button>
        </div>
    }
}
