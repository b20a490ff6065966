use std::collections::HashMap;
use std::sync::LazyLock;

use chrono::{Datelike, NaiveDateTime};
use regex::Regex;

use crate::dates::{current_date, current_time, date_with_icon, month_progress, year_progress};
use crate::i18n::Translate;

static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{([^{}]+)\}\}").expect("valid regex"));

pub type RenderContext = HashMap<String, String>;

/// Placeholders every render context provides.
pub const TEMPLATE_VARIABLES: [&str; 6] =
    ["date", "dateWithIcon", "weekday", "yearProgress", "monthProgress", "time"];

/// Build the render context for `now`.
///
/// `weekday` comes from the translation lookup, so it follows the UI language.
pub fn build_render_context(now: NaiveDateTime, t: &impl Translate) -> RenderContext {
    let today = now.date();
    let mut ctx = RenderContext::new();

    ctx.insert("date".into(), current_date(now));
    ctx.insert("dateWithIcon".into(), date_with_icon(today));
    ctx.insert("weekday".into(), t.weekday(today.weekday()));
    ctx.insert("yearProgress".into(), year_progress(today).to_string());
    ctx.insert("monthProgress".into(), month_progress(today).to_string());
    ctx.insert("time".into(), current_time(now));

    ctx
}

/// Replace `{{name}}` placeholders found in `ctx`.
///
/// Whitespace inside the braces is ignored. Unknown placeholders are left as
/// written so user text that happens to use braces survives.
pub fn render_string(template: &str, ctx: &RenderContext) -> String {
    PLACEHOLDER
        .replace_all(template, |caps: &regex::Captures<'_>| {
            let name = caps[1].trim();
            ctx.get(name).cloned().unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}

/// Render a daily task template for `now`.
pub fn render_template(template: &str, now: NaiveDateTime, t: &impl Translate) -> String {
    render_string(template, &build_render_context(now, t))
}

/// Placeholder names with a short bilingual description.
pub fn template_variables() -> Vec<(&'static str, &'static str)> {
    vec![
        ("date", "当前日期 / Current date (YYYY-MM-DD)"),
        ("dateWithIcon", "带图标的当前日期 / Current date with daily icon"),
        ("weekday", "当前星期 / Current weekday"),
        ("yearProgress", "年度进度百分比 / Year progress percentage"),
        ("monthProgress", "月度进度百分比 / Month progress percentage"),
        ("time", "当前时间 / Current time (HH:MM)"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::{Catalog, Language};
    use chrono::NaiveDate;

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 4, 16).unwrap().and_hms_opt(9, 30, 0).unwrap()
    }

    #[test]
    fn renders_every_variable() {
        let template = "{{date}}|{{dateWithIcon}}|{{weekday}}|{{yearProgress}}|{{monthProgress}}|{{time}}";
        let out = render_template(template, now(), &Catalog::for_language(Language::En));
        assert_eq!(out, "2025-04-16|🌧️ 2025-04-16|Wednesday|29|50|09:30");
    }

    #[test]
    fn no_recognized_placeholder_survives() {
        let template: String =
            TEMPLATE_VARIABLES.iter().map(|v| format!("{{{{{v}}}}} ")).collect();
        let out = render_template(&template, now(), &Catalog::for_language(Language::Zh));
        for var in TEMPLATE_VARIABLES {
            assert!(!out.contains(&format!("{{{{{var}}}}}")), "{var} left in {out}");
        }
        assert!(out.contains("星期三"));
    }

    #[test]
    fn repeated_placeholders_all_replaced() {
        let out = render_template("{{date}} and {{date}}", now(), &Catalog::for_language(Language::En));
        assert_eq!(out, "2025-04-16 and 2025-04-16");
    }

    #[test]
    fn unknown_placeholders_left_alone() {
        let out = render_template("{{mood}} {{ date }}", now(), &Catalog::for_language(Language::En));
        assert_eq!(out, "{{mood}} 2025-04-16");
    }

    #[test]
    fn variable_descriptions_cover_context() {
        let names: Vec<_> = template_variables().into_iter().map(|(n, _)| n).collect();
        assert_eq!(names, TEMPLATE_VARIABLES);
    }
}
