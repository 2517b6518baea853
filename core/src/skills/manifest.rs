use serde::Deserialize;

const DESCRIPTION_PLACEHOLDER: &str =
    "TODO: Add a clear description of what this skill does and when to use it.";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FrontMatter {
    pub name: String,
    #[serde(default)]
    pub description: String,
}

/// Renders the `SKILL.md` written by `initialize`.
pub fn render_manifest(name: &str) -> String {
    let title = title_case(name);
    format!(
        "---
name: {name}
description: {DESCRIPTION_PLACEHOLDER}
---

# {title}

TODO: Add high-level instructions and guidance for using this skill.

## Workflows

TODO: Describe the sequential steps or conditional logic for tasks supported by this skill.

## Resources

- **scripts/**: TODO: Describe executable code in this directory.
- **references/**: TODO: Describe supporting documentation in this directory.
- **assets/**: TODO: Describe templates or icons in this directory.
"
    )
}

/// `pdf-tools` -> `Pdf Tools`. Any non-letter starts a new word, so
/// `my_skill2go` -> `My_Skill2Go`.
pub fn title_case(name: &str) -> String {
    let mut title = String::with_capacity(name.len());
    let mut in_word = false;

    for c in name.chars() {
        let c = if c == '-' { ' ' } else { c };
        if c.is_alphabetic() {
            if in_word {
                title.extend(c.to_lowercase());
            } else {
                title.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            title.push(c);
            in_word = false;
        }
    }

    title
}

/// Extracts the `---` delimited header. Values such as the generated
/// description placeholder are not valid YAML scalars, so a plain
/// `key: value` reading is used when YAML parsing fails.
pub fn parse_front_matter(content: &str) -> Option<FrontMatter> {
    let lines: Vec<&str> = content.lines().collect();

    if lines.len() < 3 || lines[0].trim() != "---" {
        return None;
    }

    let pos = lines[1..].iter().position(|l| l.trim() == "---")?;
    let header = &lines[1..=pos];

    if let Ok(front_matter) = serde_yaml::from_str::<FrontMatter>(&header.join("\n")) {
        return Some(front_matter);
    }

    let field = |key: &str| {
        header.iter().find_map(|line| {
            let (k, v) = line.split_once(':')?;
            (k.trim() == key).then(|| v.trim().to_string())
        })
    };

    Some(FrontMatter {
        name: field("name")?,
        description: field("description").unwrap_or_default(),
    })
}
