use super::tilt_card::TiltCard;
use crate::model::Profile;
use crate::state::StaleReason;
use crate::util::{avatar_initial, format_date};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ProfileCardProps {
    pub profile: Profile,
    /// Set when shown from the local cache after the live lookup failed.
    #[prop_or_default]
    pub stale: Option<StaleReason>,
    #[prop_or_default]
    pub on_click: Option<Callback<()>>,
}

#[function_component]
pub fn ProfileCard(props: &ProfileCardProps) -> Html {
    let p = &props.profile;
    let row_style = "display:flex; justify-content:space-between; gap:12px; font-size:13px;";
    let label_style = "color:#8b949e;";
    let value_style = "font-variant-numeric:tabular-nums; font-weight:600;";

    html! {
        <TiltCard on_click={props.on_click.clone()} style="max-width:420px; margin:48px auto; display:flex; flex-direction:column; gap:14px;">
            <div style="display:flex; align-items:center; gap:14px;">
                <div style="width:56px; height:56px; border-radius:50%; background:#1f6feb; display:flex; align-items:center; justify-content:center; font-size:24px; font-weight:700; color:#fff; flex-shrink:0;">
                    { avatar_initial(&p.nickname) }
                </div>
                <div style="display:flex; flex-direction:column; gap:2px; min-width:0;">
                    <span style="font-size:20px; font-weight:700; overflow:hidden; text-overflow:ellipsis;">{ p.nickname.clone() }</span>
                    { if let Some(u) = &p.username { html!{<span style="font-size:13px; color:#58a6ff;">{ format!("@{}", u) }</span>} } else { html!{} } }
                </div>
            </div>
            { if let Some(q) = &p.quote { html!{<blockquote style="margin:0; padding:8px 12px; border-left:3px solid #d4af37; color:#c9d1d9; font-style:italic;">{ q.clone() }</blockquote>} } else { html!{} } }
            <div style="display:flex; flex-direction:column; gap:6px;">
                <div style={row_style}>
                    <span style={label_style}>{"Telegram ID"}</span>
                    <span style={value_style}>{ p.telegram_id }</span>
                </div>
                { if let Some(b) = &p.bot_id { html!{
                    <div style={row_style}>
                        <span style={label_style}>{"ID в боте"}</span>
                        <span style={value_style}>{ b.clone() }</span>
                    </div>
                } } else { html!{} } }
                <div style={row_style}>
                    <span style={label_style}>{"Регистрация"}</span>
                    <span style={value_style}>{ format_date(&p.created_at) }</span>
                </div>
            </div>
            { if let Some(reason) = props.stale { html!{<div style="font-size:11px; color:#f0883e;">{ reason.banner() }</div>} } else { html!{} } }
        </TiltCard>
    }
}
