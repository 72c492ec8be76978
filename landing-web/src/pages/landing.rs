//! Landing page
//!
//! The page container owns the sticky header controller. Every section below
//! the header is an `AnimatedSection` with its own reveal controller; list
//! items inside a section reveal with it, staggered per section.

use std::time::Duration;

use leptos::prelude::*;
use shared::config::StaggerConfig;
use shared::content::{CallToAction, Card, Hero, Integrations, Mission, Plan, Section};
use shared::motion::RevealVariant;

use crate::components::{AnimatedSection, ChatWidget, Entrance, Footer, Icon, Navbar, RevealItem};
use crate::state::content::use_content_context;
use crate::state::sticky::provide_sticky_context;
use crate::utils::constants::{
    CTA_STEP_DELAY_MS, HERO_ACCENT_MS, HERO_ACTIONS_DELAY_MS, HERO_ENTRANCE_MS,
    HERO_HEADLINE_DELAY_MS, HERO_PREVIEW_DELAY_MS, HERO_SUBHEADING_DELAY_MS,
    INTEGRATIONS_CTA_DELAY_MS,
};

fn ms(millis: u64) -> Duration {
    Duration::from_millis(millis)
}

#[component]
pub fn LandingPage() -> impl IntoView {
    let content = use_content_context();
    let motion = content.motion();
    provide_sticky_context(&motion);

    let stagger = motion.stagger;
    let (hero, pain_points, features, mission, steps, pricing, integrations, call_to_action) =
        content.with(|c| {
            (
                c.hero.clone(),
                c.pain_points.clone(),
                c.features.clone(),
                c.mission.clone(),
                c.steps.clone(),
                c.pricing.clone(),
                c.integrations.clone(),
                c.call_to_action.clone(),
            )
        });

    view! {
        <div class="page" id="top">
            <Navbar/>
            <main class="container main">
                <HeroSection hero=hero/>
                <CardGrid
                    id="challenges"
                    section=pain_points
                    variant=RevealVariant::FadeUp
                    increment=StaggerConfig::increment(stagger.pain_points_ms)
                />
                <CardGrid
                    id="features"
                    section=features
                    variant=RevealVariant::ScaleIn
                    increment=StaggerConfig::increment(stagger.features_ms)
                    hoverable=true
                />
                <MissionSection
                    mission=mission
                    increment=StaggerConfig::increment(stagger.mission_ms)
                />
                <StepsSection
                    steps=steps
                    increment=StaggerConfig::increment(stagger.steps_ms)
                />
                <PricingSection
                    pricing=pricing
                    increment=StaggerConfig::increment(stagger.pricing_ms)
                />
                <IntegrationsSection
                    integrations=integrations
                    increment=StaggerConfig::increment(stagger.integrations_ms)
                />
                <CallToActionSection call_to_action=call_to_action/>
            </main>
            <Footer/>
            <ChatWidget/>
        </div>
    }
}

#[component]
fn HeroSection(hero: Hero) -> impl IntoView {
    let Hero {
        headline_lead,
        headline_accent,
        headline_tail,
        subheading,
        primary_cta,
        secondary_cta,
        preview,
    } = hero;

    view! {
        <AnimatedSection class="hero">
            <Entrance
                variant=RevealVariant::FadeUp
                duration=ms(HERO_ENTRANCE_MS)
                delay=ms(HERO_HEADLINE_DELAY_MS)
            >
                <h1 class="hero-title">
                    {headline_lead}
                    <br/>
                    <Entrance
                        variant=RevealVariant::ScaleIn
                        duration=ms(HERO_ACCENT_MS)
                        delay=ms(HERO_HEADLINE_DELAY_MS)
                        class="accent hero-accent"
                        inline=true
                    >
                        {headline_accent}
                    </Entrance>
                    " "
                    {headline_tail}
                </h1>
            </Entrance>

            <Entrance
                variant=RevealVariant::Fade
                duration=ms(HERO_ENTRANCE_MS)
                delay=ms(HERO_SUBHEADING_DELAY_MS)
            >
                <p class="hero-subheading muted">{subheading}</p>
            </Entrance>

            <Entrance
                variant=RevealVariant::FadeUp
                duration=ms(HERO_ENTRANCE_MS)
                delay=ms(HERO_ACTIONS_DELAY_MS)
                class="hero-actions"
            >
                <a href="#pricing" class="btn btn-primary btn-lg">
                    {primary_cta}
                    <Icon name="arrow-right" class="btn-icon"/>
                </a>
                <a href="#features" class="btn btn-outline btn-lg">{secondary_cta}</a>
            </Entrance>

            <Entrance
                variant=RevealVariant::ScaleIn
                duration=ms(HERO_ENTRANCE_MS)
                delay=ms(HERO_PREVIEW_DELAY_MS)
                class="hero-preview"
            >
                <img
                    src=preview.src
                    alt=preview.alt
                    width=preview.width.to_string()
                    height=preview.height.to_string()
                />
            </Entrance>
        </AnimatedSection>
    }
}

#[component]
fn CardBody(card: Card, #[prop(optional)] centered: bool) -> impl IntoView {
    let icon_class = if centered { "card-icon centered" } else { "card-icon" };
    view! {
        {card.icon.map(|name| view! { <Icon name=name class=icon_class/> })}
        <h3 class="card-title">{card.title}</h3>
        <p class="muted">{card.description}</p>
    }
}

#[component]
fn CardGrid(
    #[prop(into)] id: String,
    section: Section<Card>,
    variant: RevealVariant,
    increment: Duration,
    #[prop(optional)] hoverable: bool,
) -> impl IntoView {
    let card_class = if hoverable { "card hoverable" } else { "card" };

    view! {
        <AnimatedSection id=id>
            <h2 class="section-title">{section.title}</h2>
            <div class="grid grid-3">
                {section
                    .items
                    .into_iter()
                    .enumerate()
                    .map(|(index, card)| {
                        view! {
                            <RevealItem index=index variant=variant increment=increment class=card_class>
                                <CardBody card=card/>
                            </RevealItem>
                        }
                    })
                    .collect_view()}
            </div>
        </AnimatedSection>
    }
}

#[component]
fn MissionSection(mission: Mission, increment: Duration) -> impl IntoView {
    view! {
        <AnimatedSection id="about" class="gradient">
            <div class="narrow centered">
                <h2 class="section-title">{mission.title}</h2>
                <RevealItem variant=RevealVariant::FadeUp class="statement">
                    <p class="lead muted">{mission.statement}</p>
                </RevealItem>
                <div class="grid grid-3">
                    {mission
                        .pillars
                        .into_iter()
                        .enumerate()
                        .map(|(index, pillar)| {
                            view! {
                                <RevealItem
                                    index=index
                                    variant=RevealVariant::FadeUp
                                    increment=increment
                                    class="card raised"
                                >
                                    <CardBody card=pillar centered=true/>
                                </RevealItem>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </AnimatedSection>
    }
}

#[component]
fn StepsSection(steps: Section<Card>, increment: Duration) -> impl IntoView {
    view! {
        <AnimatedSection id="how-it-works">
            <h2 class="section-title">{steps.title}</h2>
            <ol class="timeline narrow">
                {steps
                    .items
                    .into_iter()
                    .enumerate()
                    .map(|(index, step)| {
                        view! {
                            <li class="timeline-step">
                                <RevealItem index=index variant=RevealVariant::SlideIn increment=increment>
                                    <span class="step-number">{index + 1}</span>
                                    <h3 class="card-title">{step.title}</h3>
                                    <p class="muted">{step.description}</p>
                                </RevealItem>
                            </li>
                        }
                    })
                    .collect_view()}
            </ol>
        </AnimatedSection>
    }
}

#[component]
fn PricingSection(pricing: Section<Plan>, increment: Duration) -> impl IntoView {
    view! {
        <AnimatedSection id="pricing">
            <h2 class="section-title">{pricing.title}</h2>
            <div class="grid grid-2 narrow">
                {pricing
                    .items
                    .into_iter()
                    .enumerate()
                    .map(|(index, plan)| {
                        let price = plan.price_label();
                        let choose = plan.choose_label();
                        view! {
                            <RevealItem
                                index=index
                                variant=RevealVariant::ScaleIn
                                increment=increment
                                class="card hoverable plan"
                            >
                                <h3 class="plan-name accent">{plan.name}</h3>
                                <p class="plan-price">{price}<span class="muted">"/month"</span></p>
                                <ul class="plan-features">
                                    {plan
                                        .features
                                        .into_iter()
                                        .map(|feature| {
                                            view! {
                                                <li>
                                                    <Icon name="check" class="accent"/>
                                                    <span>{feature}</span>
                                                </li>
                                            }
                                        })
                                        .collect_view()}
                                </ul>
                                <button class="btn btn-primary btn-block">{choose}</button>
                            </RevealItem>
                        }
                    })
                    .collect_view()}
            </div>
        </AnimatedSection>
    }
}

#[component]
fn IntegrationsSection(integrations: Integrations, increment: Duration) -> impl IntoView {
    view! {
        <AnimatedSection id="integrations" class="gradient">
            <h2 class="section-title">{integrations.title}</h2>
            <div class="narrow centered">
                <RevealItem variant=RevealVariant::FadeUp>
                    <p class="lead muted">{integrations.statement}</p>
                </RevealItem>
                <div class="grid grid-4">
                    {integrations
                        .items
                        .into_iter()
                        .enumerate()
                        .map(|(index, integration)| {
                            view! {
                                <RevealItem
                                    index=index
                                    variant=RevealVariant::ScaleIn
                                    increment=increment
                                    class="integration"
                                >
                                    <div class="integration-logo">
                                        <img
                                            src=integration.icon
                                            alt=integration.name.clone()
                                            width="64"
                                            height="64"
                                        />
                                    </div>
                                    <p class="integration-name">{integration.name}</p>
                                </RevealItem>
                            }
                        })
                        .collect_view()}
                </div>
                <RevealItem variant=RevealVariant::FadeUp delay=ms(INTEGRATIONS_CTA_DELAY_MS)>
                    <button class="btn btn-primary integrations-cta">{integrations.cta}</button>
                </RevealItem>
            </div>
        </AnimatedSection>
    }
}

#[component]
fn CallToActionSection(call_to_action: CallToAction) -> impl IntoView {
    let step = ms(CTA_STEP_DELAY_MS);
    view! {
        <AnimatedSection id="get-started" class="centered">
            <RevealItem variant=RevealVariant::FadeUp index=0 increment=step>
                <h2 class="section-title cta-title">{call_to_action.title}</h2>
            </RevealItem>
            <RevealItem variant=RevealVariant::FadeUp index=1 increment=step>
                <p class="lead muted narrow">{call_to_action.body}</p>
            </RevealItem>
            <RevealItem variant=RevealVariant::FadeUp index=2 increment=step>
                <a href="#pricing" class="btn btn-primary btn-lg">
                    {call_to_action.button}
                    <Icon name="arrow-right" class="btn-icon"/>
                </a>
            </RevealItem>
        </AnimatedSection>
    }
}
