use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub title: String,
    #[prop_or_default]
    pub subtitle: Option<String>,
}

#[function_component(Navbar)]
pub fn navbar(props: &Props) -> Html {
    html! {
        <div class="navbar bg-base-100 shadow-sm z-40 sticky top-0">
            <div class="flex-1 px-4 flex flex-col items-start">
                <h1 class="text-xl font-bold" id="page-title">{ &props.title }</h1>
                {if let Some(subtitle) = &props.subtitle {
                    html! { <p class="text-sm text-gray-500">{subtitle}</p> }
                } else {
                    html! {}
                }}
            </div>
            <div class="flex-none gap-2">
                <label class="swap swap-rotate btn btn-ghost btn-circle">
                    <input id="theme-toggle" type="checkbox"/>
                    <i class="swap-on fill-current fas fa-sun text-xl"></i>
                    <i class="swap-off fill-current fas fa-moon text-xl"></i>
                </label>
            </div>
        </div>
    }
}
