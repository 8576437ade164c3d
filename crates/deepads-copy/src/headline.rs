//! One-line headline templates, one per framework.

use deepads_core::Framework;

use crate::context::CopyContext;
use crate::text::title_case;

pub(crate) fn headline(ctx: &CopyContext<'_>, framework: &Framework) -> String {
    let template: fn(&CopyContext<'_>) -> String = match framework {
        Framework::Aida => aida,
        Framework::Pas => pas,
        Framework::FourPs => four_ps,
        Framework::Story => story,
        Framework::Other(_) => generic,
    };
    template(ctx)
}

fn aida(ctx: &CopyContext<'_>) -> String {
    format!(
        "{}: The {} Upgrade {} Actually Use",
        ctx.product,
        title_case(ctx.keyword),
        ctx.audience
    )
}

fn pas(ctx: &CopyContext<'_>) -> String {
    format!(
        "Tired of {} Failures? Meet {}",
        ctx.keyword.to_lowercase(),
        ctx.product
    )
}

fn four_ps(ctx: &CopyContext<'_>) -> String {
    format!("{} – {} in Every Detail", ctx.product, title_case(ctx.keyword))
}

fn story(ctx: &CopyContext<'_>) -> String {
    format!(
        "How {} Go From Stuck to Thriving with {}",
        title_case(ctx.audience),
        ctx.product
    )
}

fn generic(ctx: &CopyContext<'_>) -> String {
    format!("{}: Experience {} Today", ctx.product, title_case(ctx.keyword))
}
