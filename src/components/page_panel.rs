use crate::model::{MediaType, Page};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct PagePanelProps {
    /// None (out-of-range spread position) renders nothing.
    pub page: Option<Page>,
}

#[function_component(PagePanel)]
pub fn page_panel(props: &PagePanelProps) -> Html {
    let Some(page) = &props.page else {
        return html! {};
    };
    let (glyph, caption) = match page.media_type {
        MediaType::Image => ("\u{1F4F7}", "Image Placeholder"),
        MediaType::Video => ("\u{1F3AC}", "Video Placeholder"),
    };
    html! {
        <div style="padding:32px; width:100%; height:100%; display:flex; flex-direction:column; box-sizing:border-box;">
            <h2 style="font-size:24px; font-family:Georgia, serif; margin:0 0 18px 0; color:#111827; border-bottom:2px solid #d1d5db; padding-bottom:10px;">
                { &page.title }
            </h2>
            <div style="flex:1; display:flex; align-items:center; justify-content:center; background:linear-gradient(135deg, #f9fafb, #f3f4f6); margin-bottom:18px; border-radius:4px; border:2px dashed #d1d5db;">
                <div style="text-align:center;">
                    <span style="font-size:48px; display:block; margin-bottom:8px;">{ glyph }</span>
                    <span style="font-size:12px; color:#6b7280;">{ caption }</span>
                </div>
            </div>
            <p style="font-size:14px; color:#1f2937; line-height:1.8; text-align:justify; font-family:Georgia, serif; margin:0;">
                { &page.content }
            </p>
            <div style="margin-top:18px; font-size:12px; color:#9ca3af; text-align:center; font-family:Georgia, serif;">
                { format!("\u{2014} {} \u{2014}", page.id) }
            </div>
        </div>
    }
}
