use yew::prelude::*;

fn default_surface() -> Classes {
    classes!("card-surface")
}

#[derive(Properties, PartialEq)]
pub struct CardProps {
    #[prop_or_default]
    pub title: Option<AttrValue>,
    #[prop_or_default]
    pub image: Option<AttrValue>,
    #[prop_or_default]
    pub image_alt: AttrValue,
    /// Replaces the default surface styling, like a `className` override.
    #[prop_or_else(default_surface)]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Card)]
pub fn card(props: &CardProps) -> Html {
    html! {
        <div class={classes!("card", props.class.clone())}>
            {
                if let Some(image) = &props.image {
                    html! {
                        <div class="card-media">
                            <img src={image.clone()} alt={props.image_alt.clone()} loading="lazy" />
                        </div>
                    }
                } else {
                    html! {}
                }
            }
            <div class="card-body">
                {
                    if let Some(title) = &props.title {
                        html! { <h3 class="card-title">{title.clone()}</h3> }
                    } else {
                        html! {}
                    }
                }
                { for props.children.iter() }
            </div>
        </div>
    }
}
