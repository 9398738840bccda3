use url::form_urlencoded;

use crate::core::options::RenderOptions;

pub const CARBON_URL: &str = "https://carbon.now.sh";

/// Builds the Carbon URL that renders `code` with `options`.
///
/// Parameters are emitted in a fixed order and form-urlencoded. The scale
/// factor is not part of the URL; it configures the page instead.
pub fn carbon_url(code: &str, options: &RenderOptions) -> String {
    format!("{}?{}", CARBON_URL, query_string(code, options))
}

pub fn query_string(code: &str, options: &RenderOptions) -> String {
    let first_line = options.first_line_number().to_string();

    form_urlencoded::Serializer::new(String::new())
        .append_pair("code", code)
        .append_pair("bg", options.background_color())
        .append_pair("ds", flag(options.drop_shadow()))
        .append_pair("dsblur", options.drop_shadow_blur_radius())
        .append_pair("dsyoff", options.drop_shadow_offset_y())
        .append_pair("fm", options.font_family())
        .append_pair("fs", options.font_size())
        .append_pair("ln", flag(options.line_numbers()))
        .append_pair("fl", &first_line)
        .append_pair("lh", options.line_height())
        .append_pair("ph", options.padding_horizontal())
        .append_pair("pv", options.padding_vertical())
        .append_pair("t", options.theme())
        .append_pair("wa", flag(options.width_adjustment()))
        .append_pair("wc", flag(options.window_controls()))
        .append_pair("wm", flag(options.watermark()))
        .append_pair("l", options.language().mode())
        .append_pair("wt", options.window_theme().mode())
        .finish()
}

fn flag(value: bool) -> &'static str {
    if value { "true" } else { "false" }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::language::{Language, WindowTheme};

    fn decode(url: &str) -> Vec<(String, String)> {
        let query = url.strip_prefix("https://carbon.now.sh?").unwrap();
        form_urlencoded::parse(query.as_bytes()).into_owned().collect()
    }

    fn param(pairs: &[(String, String)], name: &str) -> String {
        let found: Vec<&String> = pairs.iter().filter(|(k, _)| k == name).map(|(_, v)| v).collect();
        assert_eq!(found.len(), 1, "expected exactly one {name}");
        found[0].clone()
    }

    #[test]
    fn default_query_string() {
        let query = query_string("print(1)", &RenderOptions::default());
        assert_eq!(
            query,
            "code=print%281%29\
             &bg=rgba%28171%2C+184%2C+195%2C+1%29\
             &ds=true&dsblur=68px&dsyoff=20px&fm=Hack&fs=14px\
             &ln=false&fl=1&lh=133%25&ph=56px&pv=56px&t=seti\
             &wa=true&wc=true&wm=false&l=auto&wt=none"
        );
    }

    #[test]
    fn url_has_single_separator() {
        let url = carbon_url("x", &RenderOptions::default());
        assert!(url.starts_with("https://carbon.now.sh?code=x&"));
        assert!(!url.ends_with('&'));
    }

    #[test]
    fn every_parameter_appears_once() {
        let pairs = decode(&carbon_url("print(1)", &RenderOptions::default()));
        let names = [
            "code", "bg", "ds", "dsblur", "dsyoff", "fm", "fs", "ln", "fl", "lh", "ph", "pv",
            "t", "wa", "wc", "wm", "l", "wt",
        ];
        assert_eq!(pairs.len(), names.len());
        for name in names {
            param(&pairs, name);
        }
        assert_eq!(param(&pairs, "code"), "print(1)");
        assert_eq!(param(&pairs, "bg"), "rgba(171, 184, 195, 1)");
        assert_eq!(param(&pairs, "t"), "seti");
        assert_eq!(param(&pairs, "wt"), "none");
    }

    #[test]
    fn reserved_characters_survive_decoding() {
        let code = "let a = b & c;\n# done = 100% ✓ 日本\t+";
        let options = RenderOptions::builder()
            .background_color("#ff00ff")
            .font_family("Fira Code")
            .build();

        let url = carbon_url(code, &options);
        assert!(!url.contains('\n'));
        assert!(!url.contains(' '));

        let pairs = decode(&url);
        assert_eq!(param(&pairs, "code"), code);
        assert_eq!(param(&pairs, "bg"), "#ff00ff");
        assert_eq!(param(&pairs, "fm"), "Fira Code");
    }

    #[test]
    fn every_language_emits_its_mode() {
        for &language in Language::ALL {
            let options = RenderOptions::builder().language(language).build();
            let pairs = decode(&carbon_url("", &options));
            let l = param(&pairs, "l");
            assert!(!l.is_empty());
            assert_eq!(l, language.mode());
        }
    }

    #[test]
    fn window_theme_emits_its_mode() {
        let emitted: Vec<String> = WindowTheme::ALL
            .iter()
            .map(|&theme| {
                let options = RenderOptions::builder().window_theme(theme).build();
                param(&decode(&carbon_url("", &options)), "wt")
            })
            .collect();
        assert_eq!(emitted, vec!["none", "sharp", "bw"]);
    }

    #[test]
    fn scale_factor_does_not_change_url() {
        let scaled = RenderOptions::builder().scale_factor(4).build();
        assert_eq!(
            carbon_url("fn main() {}", &RenderOptions::default()),
            carbon_url("fn main() {}", &scaled)
        );
    }

    #[test]
    fn overrides_are_stringified() {
        let options = RenderOptions::builder()
            .drop_shadow(false)
            .line_numbers(true)
            .first_line_number(-7)
            .watermark(true)
            .build();
        let pairs = decode(&carbon_url("", &options));
        assert_eq!(param(&pairs, "ds"), "false");
        assert_eq!(param(&pairs, "ln"), "true");
        assert_eq!(param(&pairs, "fl"), "-7");
        assert_eq!(param(&pairs, "wm"), "true");
    }
}
