use crate::components::sections::Architecture::*;
use crate::components::sections::Contact::*;
use crate::components::sections::Solutions::*;
use crate::components::sections::VisionMission::*;
use crate::components::BackToTop::*;
use crate::components::HeroHeader::*;
use crate::components::Page::*;
use crate::scroll::use_smooth_scroll;
use crate::state::Theme;
use leptos::*;
use leptos_meta::*;

#[component]
pub fn Home() -> impl IntoView {
    // Page-lifetime state and the smooth-scroll acquisition both live in
    // this scope, so teardown of the page releases everything at once.
    provide_context(create_rw_signal(Theme::default()));
    use_smooth_scroll();

    view! {
        <Title text="SmartCare IoMT Ecosystem"/>
        <Page>
            <HeroHeader/>
            <VisionMissionSection/>
            <SolutionsSection/>
            <ArchitectureSection/>
            <ContactSection/>
            <BackToTop/>
        </Page>
    }
}
