use web_sys::Element;
use yew::prelude::*;

use crate::state::tilt::TiltPhase;
use crate::state::{TiltAction, TiltSurface};

#[derive(Properties, PartialEq, Clone)]
pub struct TiltCardProps {
    #[prop_or_default]
    pub children: Children,
    /// Activation target. Cards without one do not tilt and are not elevated.
    #[prop_or_default]
    pub on_click: Option<Callback<()>>,
    /// Extra inline style appended to the card's own.
    #[prop_or_default]
    pub style: AttrValue,
}

#[function_component]
pub fn TiltCard(props: &TiltCardProps) -> Html {
    let interactive = props.on_click.is_some();
    let card_ref = use_node_ref();
    let surface = use_reducer_eq(|| TiltSurface::new(interactive));

    // Props may gain or lose the click target between renders.
    {
        let surface = surface.clone();
        use_effect_with(interactive, move |interactive| {
            surface.dispatch(TiltAction::SetInteractive(*interactive));
            || ()
        });
    }

    let onmousemove = {
        let surface = surface.clone();
        let card_ref = card_ref.clone();
        Callback::from(move |e: MouseEvent| {
            let Some(el) = card_ref.cast::<Element>() else {
                return;
            };
            let rect = el.get_bounding_client_rect();
            surface.dispatch(TiltAction::PointerMove {
                x: e.client_x() as f64 - rect.left(),
                y: e.client_y() as f64 - rect.top(),
                width: rect.width(),
                height: rect.height(),
            });
        })
    };
    let onmouseleave = {
        let surface = surface.clone();
        Callback::from(move |_: MouseEvent| surface.dispatch(TiltAction::PointerLeave))
    };
    let onclick = {
        let cb = props.on_click.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(cb) = &cb {
                cb.emit(());
            }
        })
    };

    let v = surface.visual_state();
    let shadow = if v.elevated {
        "0 18px 40px rgba(0,0,0,0.45), 0 0 0 1px rgba(88,166,255,0.25)"
    } else {
        "0 4px 12px rgba(0,0,0,0.25)"
    };
    let phase = match surface.phase() {
        TiltPhase::Idle => "idle",
        TiltPhase::Tilted => "tilted",
    };
    let cursor = if interactive { "pointer" } else { "default" };
    let style = format!(
        "background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:12px; padding:16px 20px; transform:{}; transition:transform 0.1s ease-out, box-shadow 0.2s ease; box-shadow:{}; cursor:{}; will-change:transform; {}",
        v.transform_css(),
        shadow,
        cursor,
        props.style
    );

    html! {
        <div ref={card_ref} style={style} data-tilt={phase} {onmousemove} {onmouseleave} {onclick}>
            { for props.children.iter() }
        </div>
    }
}
