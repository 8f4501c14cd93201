//! The README template renderer.
//!
//! Pure and deterministic: the same complete [`AnswerSet`] always yields
//! the same document, byte for byte. All substitution is direct string
//! interpolation; user-supplied text is not escaped (an accepted
//! limitation of the format).

use tracing::debug;

use crate::domain::error::DomainError;
use crate::domain::license::License;
use crate::domain::question::{AnswerSet, FieldId};

/// Render the full README from a complete answer set.
///
/// Fails with [`DomainError::MissingAnswer`] if any field is absent —
/// rendering never runs on partial input.
pub fn render(answers: &AnswerSet) -> Result<String, DomainError> {
    let title = answers.require(FieldId::Title)?;
    let description = answers.require(FieldId::Description)?;
    let installation = answers.require(FieldId::Installation)?;
    let usage = answers.require(FieldId::Usage)?;
    let license: License = answers.require(FieldId::License)?.parse()?;
    let contributing = answers.require(FieldId::Contributing)?;
    let tests = answers.require(FieldId::Tests)?;
    let github = answers.require(FieldId::Github)?;
    let email = answers.require(FieldId::Email)?;

    debug!(%license, "Rendering document");

    Ok(format!(
        "# {title}

{badge}

## Description

{description}

## Table of Contents

- [Installation](#installation)
- [Usage](#usage)
- [License](#license)
- [Contributing](#contributing)
- [Tests](#tests)
- [Questions](#questions)

## Installation

```
{installation}
```

## Usage

{usage}

## License

This project is licensed under the {license} license. For more information, see {link}

## Contributing

{contributing}

## Tests

To run tests, use the following command:

```
{tests}
```

## Questions

For any questions, please contact me:

- GitHub: [{github}](https://github.com/{github})
- Email: {email}
",
        badge = license.badge(),
        link = license.link(),
    ))
}

// ── tests ─────────────────────────────────────────────────────────────────────
