//! Built-in documentation installed when nothing has been persisted yet.

use crate::tree::PageTree;

const INTRO: &str = "<h2>Introduction</h2>
<p>Welcome to the Pinlty Documentation! This guide helps you understand how to use and expand the Pinlty engine.</p>";

const SETUP: &str = "<h2>Setup</h2>
<p>1. Clone or download the Pinlty repository.<br>
2. Open it in your preferred editor.<br>
3. Run <code>npm install</code> or set up your local environment.</p>";

const USAGE: &str = "<h2>Usage</h2>
<p>Pinlty provides tools to create 3D and 2D experiences. Extend it with C#, GLSL, or OpenTK scripts depending on your module type.</p>";

const EDITOR_OVERVIEW: &str = "<h2>Editor Overview</h2>
<p>The Editor is the main window for managing assets, scenes, and settings.<br>
It\u{2019}s where you create and modify game content visually.</p>";

const EDITOR_ASSETS: &str = "<h2>Editor: Assets</h2>
<p>The Assets panel shows your project\u{2019}s imported files.<br>
You can drag and drop new models, textures, or scripts here.</p>";

const CODING_PIN: &str = r#"<h2>Coding: .Pin</h2>
<p>The .Pin language is the language you use to create scripts that then get combined in the .PinM language. An Example of a script:<br>
<code>func mStart() // mStart is the code that's run when the object is created<br>
{<br>
||||print("this is the start"); /*print(); writes something to the console, (/)->(*) is a comment that ends and the (;) tells the compiler that this is the end of the line*/<br>
}  // the {} are the encasing of custom things<br>
<br>
func doSomething()<br>
{<br>
||||transform.position += vec3(0.0, 0.0, 1.0); /* the component that makes it exist */<br>
}<br>
<br>
main.Start = mStart(); /*tells the .PinM what the start function is*/<br>
main.Update = doSomething(); /*tells the .PinM what the update function is*/<br></code></p>"#;

const FAQ: &str = "<h2>FAQ</h2>
<p><b>Q:</b> How do I contribute?<br>
<b>A:</b> Fork the repo, make your changes, and submit a pull request!</p>";

/// The documentation shipped with the viewer.
#[must_use]
pub fn default_tree() -> PageTree {
    PageTree::new()
        .with_page("intro", INTRO)
        .with_page("setup", SETUP)
        .with_page("usage", USAGE)
        .with_section(
            "editor",
            PageTree::new()
                .with_page("overview", EDITOR_OVERVIEW)
                .with_page("assets", EDITOR_ASSETS),
        )
        .with_section("coding", PageTree::new().with_page("pin", CODING_PIN))
        .with_page("faq", FAQ)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PagePath;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_tree_pages() {
        let ids: Vec<String> = default_tree()
            .page_paths()
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(
            ids,
            vec![
                "coding-pin",
                "editor-assets",
                "editor-overview",
                "faq",
                "intro",
                "setup",
                "usage"
            ]
        );
    }

    #[test]
    fn test_default_intro() {
        let tree = default_tree();
        let intro = tree.lookup(&PagePath::parse("intro")).content().unwrap();
        assert!(intro.starts_with("<h2>Introduction</h2>"));
        assert!(intro.contains("Welcome to the Pinlty Documentation!"));
    }
}
