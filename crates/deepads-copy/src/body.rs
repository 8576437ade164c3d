//! Multi-section body templates, one per framework.
//!
//! Bodies are Markdown: each section is a bold heading followed by a hard
//! line break (two trailing spaces) and one paragraph.

use deepads_core::Framework;

use crate::context::CopyContext;
use crate::text::title_case;

pub(crate) fn body(ctx: &CopyContext<'_>, framework: &Framework) -> String {
    let template: fn(&CopyContext<'_>) -> String = match framework {
        Framework::Aida => aida,
        Framework::Pas => pas,
        Framework::FourPs => four_ps,
        Framework::Story => story,
        Framework::Other(_) => description_only,
    };
    template(ctx)
}

fn description_only(ctx: &CopyContext<'_>) -> String {
    ctx.base.clone()
}

fn sections(parts: &[(&str, String)]) -> String {
    parts
        .iter()
        .map(|(heading, text)| format!("**{heading}**  \n{text}"))
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn aida(ctx: &CopyContext<'_>) -> String {
    let desire = if ctx.desires.is_empty() {
        "Imagine a simpler, smoother way to hit your goals.".to_string()
    } else {
        ctx.desires.join(" ")
    };

    sections(&[
        (
            "Attention",
            format!(
                "{} are craving {} that actually works.",
                title_case(ctx.audience),
                ctx.keyword.to_lowercase()
            ),
        ),
        (
            "Interest",
            format!(
                "{} is built for {} who want less friction and more momentum.",
                ctx.base, ctx.audience
            ),
        ),
        ("Desire", desire),
        (
            "Action",
            "Tap the CTA to move from “thinking about it” to “doing it” today.".to_string(),
        ),
    ])
}

fn pas(ctx: &CopyContext<'_>) -> String {
    let problem = ctx.pains.first().cloned().unwrap_or_else(|| {
        format!("wasting time on tools that don't fit {}", ctx.audience)
    });
    let agitation = ctx.pains.get(1).map_or(
        "your team is tired of trying to duct-tape solutions together",
        String::as_str,
    );

    sections(&[
        ("Problem", format!("You’re {problem}.")),
        (
            "Agitation",
            format!("And it’s not just annoying – {agitation}."),
        ),
        (
            "Solution",
            format!(
                "{} wraps {} around how {} already work, so you get results without the chaos.",
                ctx.base,
                ctx.keyword.to_lowercase(),
                ctx.audience
            ),
        ),
    ])
}

fn four_ps(ctx: &CopyContext<'_>) -> String {
    let desire_line = ctx
        .desires
        .first()
        .map_or("get consistent, predictable results", String::as_str);

    sections(&[
        (
            "Product",
            format!("{} designed specifically for {}.", ctx.base, ctx.audience),
        ),
        (
            "Price",
            format!(
                "Priced so that {} can {desire_line} without blowing the budget.",
                ctx.audience
            ),
        ),
        ("Place", format!("Launch in minutes on {}.", ctx.platform)),
        (
            "Promotion",
            format!(
                "Early adopters get our {} playbook free.",
                ctx.keyword.to_lowercase()
            ),
        ),
    ])
}

fn story(ctx: &CopyContext<'_>) -> String {
    let stuck = ctx
        .pains
        .first()
        .map_or("juggling tools and tactics", String::as_str);
    let saw = ctx
        .desires
        .first()
        .map_or("momentum in days, not months", String::as_str);
    let now = ctx
        .desires
        .get(1)
        .map_or("hit goals with less stress", String::as_str);
    let doubt = ctx.objections.first().cloned().unwrap_or_else(|| {
        format!("wondering if this really works for {}", ctx.audience)
    });

    sections(&[
        (
            "Before",
            format!("{} were stuck {stuck}.", title_case(ctx.audience)),
        ),
        (
            "Turning Point",
            format!("They tried {} and saw {saw}.", ctx.base),
        ),
        (
            "After",
            format!("Now they {now} – even if they were {doubt} at first."),
        ),
    ])
}

#[cfg(test)]
#[path = "body_test.rs"]
mod tests;
