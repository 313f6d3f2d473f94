use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ModalProps {
    pub on_close: Callback<()>,
    #[prop_or_default]
    pub class: Classes,
    pub children: Children,
}

/// Capa modal: clic en el fondo cierra, clic en el contenido no
#[function_component(Modal)]
pub fn modal(props: &ModalProps) -> Html {
    html! {
        <div class="modal active">
            <div class="modal-overlay" onclick={props.on_close.reform(|_| ())}></div>
            <div
                class={classes!("modal-content", props.class.clone())}
                onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}
            >
                <button class="btn-close" onclick={props.on_close.reform(|_| ())}>
                    {"✕"}
                </button>
                {props.children.clone()}
            </div>
        </div>
    }
}
