use compute::Outlook;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct OutlookBannerProps {
    pub outlook: Outlook,
}

#[function_component(OutlookBanner)]
pub fn outlook_banner(props: &OutlookBannerProps) -> Html {
    let outlook = props.outlook;

    html! {
        <div class={classes!("alert", outlook.alert_class(), "mb-6")}>
            <i class={outlook.icon()}></i>
            <span class="font-semibold">{outlook.message()}</span>
        </div>
    }
}
