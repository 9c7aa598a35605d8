use yew::prelude::*;

#[derive(Clone, Copy, PartialEq)]
pub enum StatusKind {
    Info,
    Error,
}

#[derive(Properties, PartialEq, Clone)]
pub struct StatusPanelProps {
    pub kind: StatusKind,
    pub title: AttrValue,
    #[prop_or_default]
    pub detail: Option<AttrValue>,
}

#[function_component]
pub fn StatusPanel(props: &StatusPanelProps) -> Html {
    let color = match props.kind {
        StatusKind::Info => "#8b949e",
        StatusKind::Error => "#f85149",
    };
    html! {<div style="max-width:420px; margin:48px auto; background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:12px; padding:20px; text-align:center;">
        <div style={format!("font-size:18px; font-weight:600; color:{};", color)}>{ props.title.clone() }</div>
        { if let Some(d) = &props.detail { html!{<div style="font-size:12px; color:#8b949e; margin-top:8px;">{ d.clone() }</div>} } else { html!{} } }
    </div>}
}
