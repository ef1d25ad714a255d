use crate::ui::widgets::r#box::Box;

pub fn render_version(version: &str, supports_color: bool, supports_unicode: bool) -> String {
    let mut b = Box::with_title(format!("emicalc v{}", version));
    b.add_line("Car loan EMI calculator");
    b.add_empty();
    b.add_line("Method:   reducing balance, monthly compounding");
    b.add_line("Amounts:  whole currency units");
    b.render(supports_color, supports_unicode)
}
