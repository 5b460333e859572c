//! Prompt templates
//!
//! Pure functions from user-entered text, the current code, and the example
//! card to a single user prompt. Nothing here touches the file system.

/// Import block offered to the model when it repairs a card
pub const EXAMPLE_IMPORTS: &str = "\
import {
  contains,
  field,
  Card,
  Component,
  containsMany,
  relativeTo,
} from 'https://cardstack.com/base/card-api';
import StringCard from 'https://cardstack.com/base/string';
import TextAreaCard from 'https://cardstack.com/base/text-area';
import { CardContainer, FieldContainer } from '@cardstack/boxel-ui';
import { startCase } from 'lodash';
import { eq } from '@cardstack/boxel-ui/helpers/truth-helpers';";

/// Prompt for the first draft of the card template
pub fn code_prompt(example: &str, description: &str) -> String {
    format!(
        "Here is a set of glimmer (ember) templates for creating boxel cards:
{example}
Please use this as a starting example,
and construct a template for a card for
{description} that a user would see coming to a typical website.
Think about what usually appears in that section of a page,
how it should be rendered and what the person running the site may want to customise.
Return only the template code, no extra data, information or examples. Do not render the template.
"
    )
}

/// Prompt asking the model to repair code the content server rejected
pub fn fix_prompt(example: &str, description: &str, code: &str, error: &str) -> String {
    format!(
        "Here is a glimmer (ember) template that creates a {description}:
{code}
Please fix the error: {error}
Return only the code, no extra data, information or examples.
Here are example imports
```
{EXAMPLE_IMPORTS}
```
And here is a working example card for reference:
{example}
"
    )
}

/// Prompt for a stylesheet matching a style description
pub fn css_prompt(example: &str, description: &str, code: &str, style: &str) -> String {
    format!(
        "Here is a glimmer (ember) template that creates a {description}:
{code}
For reference, this is how an example card is structured:
{example}
Please write CSS for this card in the following style: {style}
Use selectors that match the elements and classes in the template.
Return only the CSS, no extra data, information or examples.
"
    )
}

/// Prompt for field copy, answered as a JSON object
pub fn json_prompt(example: &str, description: &str, code: &str, use_case: &str) -> String {
    format!(
        "Here is a glimmer (ember) template that creates a {description}:
{code}
For reference, this is how an example card declares its fields:
{example}
Please create JSON to fill the fields with copy that matches the use case: {use_case}
The JSON must be a single object whose keys are the field names.
Return only the JSON, no extra data, information or examples.
"
    )
}
