//! Shared helper validators.
//!
//! Date-only, time-only and day-of-week fields reference validators exported
//! by a helper module instead of inlining them. This module renders that
//! helper module so generated schemas have something to import from.

use crate::options::ResolverOptions;
use crate::resolver::CORE_VALIDATOR;

/// Validator for calendar dates without time of day.
pub const DATE_ONLY: &str = "zDateOnly";

/// Validator for times of day without a date.
pub const TIME_ONLY: &str = "zTimeOnly";

/// Validator for day-of-week names.
pub const DAY_OF_WEEK: &str = "zDayOfWeek";

const DAYS_OF_WEEK: [(&str, &str); 7] = [
    ("MONDAY", "Monday"),
    ("TUESDAY", "Tuesday"),
    ("WEDNESDAY", "Wednesday"),
    ("THURSDAY", "Thursday"),
    ("FRIDAY", "Friday"),
    ("SATURDAY", "Saturday"),
    ("SUNDAY", "Sunday"),
];

/// Render the TypeScript source of the helper module.
pub fn render_helpers_module(options: &ResolverOptions) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "import {{ {} }} from '{}';\n\n",
        CORE_VALIDATOR, options.validation_library
    ));

    out.push_str("export const REGEX_TIME = /^([01]\\d|2[0-3]):([0-5]\\d):([0-5]\\d)$/;\n\n");
    out.push_str(
        "export const REGEX_DATE =\n  /^(?:19|20)\\d\\d-(0[1-9]|1[0-2])-(0[1-9]|[12][0-9]|3[01])$/;\n\n",
    );

    out.push_str("export const DayOfWeek = {\n");
    for (key, label) in DAYS_OF_WEEK {
        out.push_str(&format!("  {}: '{}',\n", key, label));
    }
    out.push_str("};\n\n");

    out.push_str(&format!(
        "export const {} = z\n  .string()\n  .regex(REGEX_DATE)\n  .refine((arg) => {{\n    const date = new Date(`${{arg}}T00:00:00Z`);\n    return !Number.isNaN(date.getTime()) && date.toISOString().startsWith(arg);\n  }});\n\n",
        DATE_ONLY
    ));
    out.push_str(&format!(
        "export const {} = z.string().regex(REGEX_TIME);\n\n",
        TIME_ONLY
    ));
    out.push_str(&format!(
        "export const {} = z\n  .string()\n  .refine((arg) => Object.keys(DayOfWeek).includes(arg));\n",
        DAY_OF_WEEK
    ));

    out
}
