use shared::content::ContentSection;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ContentPageProps {
    pub title: AttrValue,
    #[prop_or_default]
    pub subtitle: Option<AttrValue>,
    pub sections: &'static [ContentSection],
}

/// Static marketing/legal page built from content sections
#[function_component(ContentPage)]
pub fn content_page(props: &ContentPageProps) -> Html {
    html! {
        <main class="content-page">
            <div class="container narrow">
                <h1>{&props.title}</h1>
                if let Some(subtitle) = &props.subtitle {
                    <p class="content-subtitle">{subtitle.clone()}</p>
                }
                {for props.sections.iter().map(|section| html! {
                    <section class="content-section" key={section.heading}>
                        <h2>{section.heading}</h2>
                        {for section.paragraphs.iter().map(|p| html! { <p>{*p}</p> })}
                    </section>
                })}
            </div>
        </main>
    }
}
