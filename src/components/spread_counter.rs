use crate::util::format_spread;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct SpreadCounterProps {
    pub spread: usize,
    pub total: usize,
}

#[function_component(SpreadCounter)]
pub fn spread_counter(props: &SpreadCounterProps) -> Html {
    html! {
        <div style="position:absolute; bottom:24px; left:50%; transform:translateX(-50%); background:rgba(255,255,255,0.9); backdrop-filter:blur(4px); padding:10px 22px; border-radius:999px; font-size:13px; color:#374151; box-shadow:0 4px 12px rgba(0,0,0,0.25);">
            { format_spread(props.spread, props.total) }
        </div>
    }
}
