use web_sys::MouseEvent;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ToggleSwitchProps {
    pub checked: bool,
    pub label: AttrValue,
    pub on_toggle: Callback<()>,
    #[prop_or_default]
    pub disabled: bool,
}

#[function_component(ToggleSwitch)]
pub fn toggle_switch(props: &ToggleSwitchProps) -> Html {
    let onclick = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |_: MouseEvent| on_toggle.emit(()))
    };

    html! {
        <button
            type="button"
            role="switch"
            class={classes!("toggle-switch", props.checked.then_some("on"))}
            aria-checked={props.checked.to_string()}
            aria-label={props.label.clone()}
            disabled={props.disabled}
            {onclick}
        >
            <span class="toggle-knob"></span>
        </button>
    }
}
