pub mod en;
pub mod keys;
pub mod zh;

/// Substitutes each `{}` in `template` with the next argument, in order.
/// Surplus placeholders are left as they are; surplus arguments are dropped.
pub fn fill(template: &str, args: &[&str]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    let mut args = args.iter();

    while let Some(idx) = rest.find("{}") {
        match args.next() {
            Some(arg) => {
                out.push_str(&rest[..idx]);
                out.push_str(arg);
                rest = &rest[idx + 2..];
            }
            None => break,
        }
    }
    out.push_str(rest);
    out
}
