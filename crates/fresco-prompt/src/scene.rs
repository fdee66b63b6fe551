//! Scene-code generation prompts

use fresco_domain::AnimationStyle;

/// A complete prompt recipe for one animation style
#[derive(Debug, Clone, Copy)]
pub struct ScenePromptTemplate {
    /// System role for the generator
    pub system_prompt: &'static str,
    /// Worked examples prepended to the user prompt
    pub few_shot: &'static [FewShotExample],
    /// Substrings well-formed generated code must contain
    pub validation_markers: &'static [&'static str],
}

/// One worked generation example
#[derive(Debug, Clone, Copy)]
pub struct FewShotExample {
    /// What the example demonstrates
    pub description: &'static str,
    /// The scene code produced for it
    pub code: &'static str,
}

/// Look up the prompt recipe for a style
pub fn template_for(style: AnimationStyle) -> &'static ScenePromptTemplate {
    match style {
        AnimationStyle::Basic => &BASIC_TEMPLATE,
        AnimationStyle::Mathematical => &MATH_TEMPLATE,
        AnimationStyle::Educational => &EDUCATIONAL_TEMPLATE,
    }
}

/// Cheap structural check on generated scene code
///
/// True when the code contains every validation marker of its style. This
/// is a smoke test for "did the generator return code at all", not a
/// semantic review - that is the quality layer's job.
pub fn code_passes_markers(code: &str, style: AnimationStyle) -> bool {
    template_for(style)
        .validation_markers
        .iter()
        .all(|marker| code.contains(marker))
}

/// Builds the user prompt for a scene-generation call
pub struct ScenePrompt {
    content: String,
    requirements: Option<String>,
    audience: Option<String>,
    concepts: Vec<String>,
}

impl ScenePrompt {
    /// Create a prompt for the given narration content
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            requirements: None,
            audience: None,
            concepts: Vec::new(),
        }
    }

    /// Add generation requirements (mathematical style)
    pub fn with_requirements(mut self, requirements: impl Into<String>) -> Self {
        self.requirements = Some(requirements.into());
        self
    }

    /// Add a target audience (educational style)
    pub fn with_audience(mut self, audience: impl Into<String>) -> Self {
        self.audience = Some(audience.into());
        self
    }

    /// Add the key concepts the scene must cover (educational style)
    pub fn with_concepts(mut self, concepts: Vec<String>) -> Self {
        self.concepts = concepts;
        self
    }

    /// Build the complete user prompt for `style`
    pub fn build(&self, style: AnimationStyle) -> String {
        let template = template_for(style);
        let mut prompt = String::new();

        for example in template.few_shot {
            prompt.push_str(&format!(
                "Example - {}:\n```python\n{}\n```\n\n",
                example.description, example.code
            ));
        }

        match style {
            AnimationStyle::Basic => {
                prompt.push_str(&format!("Generate scene code for: {}", self.content));
            }
            AnimationStyle::Mathematical => {
                prompt.push_str(&format!(
                    "Create a mathematical animation for: {}\n\nRequirements:\n{}",
                    self.content,
                    self.requirements.as_deref().unwrap_or("none")
                ));
            }
            AnimationStyle::Educational => {
                prompt.push_str(&format!(
                    "Create an educational animation explaining: {}\n\nTarget audience: {}\nKey concepts: {}",
                    self.content,
                    self.audience.as_deref().unwrap_or("general"),
                    self.concepts.join(", ")
                ));
            }
        }

        prompt
    }
}

static BASIC_TEMPLATE: ScenePromptTemplate = ScenePromptTemplate {
    system_prompt: BASIC_SYSTEM_PROMPT,
    few_shot: &[],
    validation_markers: &["from manim import", "class", "Scene", "def construct"],
};

static MATH_TEMPLATE: ScenePromptTemplate = ScenePromptTemplate {
    system_prompt: MATH_SYSTEM_PROMPT,
    few_shot: &[PYTHAGOREAN_EXAMPLE],
    validation_markers: &["MathTex", "from manim import"],
};

static EDUCATIONAL_TEMPLATE: ScenePromptTemplate = ScenePromptTemplate {
    system_prompt: EDUCATIONAL_SYSTEM_PROMPT,
    few_shot: &[],
    validation_markers: &["from manim import", "self.wait"],
};

const BASIC_SYSTEM_PROMPT: &str = r#"You are an expert Manim Community code generator. You ONLY respond with valid scene code, nothing else.

# Critical Rules:
1. Always use 'Scene' as the base class
2. Always use 'construct' as the main animation method
3. Always include proper imports: from manim import *
4. Use clear, descriptive variable names
5. Follow Manim best practices for smooth animations

# Code Structure Template:
```python
from manim import *

class GeneratedScene(Scene):
    def construct(self):
        # Your animation code here
        pass
```

IMPORTANT: Return ONLY the Python code, no explanations or markdown."#;

const MATH_SYSTEM_PROMPT: &str = r#"You are a mathematical animation expert specializing in Manim Community.

# Mathematical Animation Rules:
1. Use LaTeX for all mathematical expressions: MathTex("\\frac{1}{2}")
2. Color-code mathematical concepts consistently
3. Include step-by-step visual proofs when applicable
4. Use coordinate systems when showing geometric relationships

# Standard Colors:
- BLUE: primary shapes and main concepts
- RED: emphasis and important results
- GREEN: secondary elements and comparisons
- YELLOW: highlights and final conclusions

# Animation Patterns:
- Create(): drawing geometric shapes
- Write(): mathematical text and equations
- Transform(): mathematical transformations
- LaggedStart(): sequential element animations

RETURN ONLY PYTHON CODE, NO EXPLANATIONS."#;

const EDUCATIONAL_SYSTEM_PROMPT: &str = r#"You are an educational animation specialist using Manim Community.

# Educational Animation Principles:
1. Start with simple concepts, build complexity gradually
2. Use clear visual hierarchies and consistent styling
3. Include titles and descriptive labels
4. Make animations self-explanatory through visual cues

# Structure:
1. Title/Introduction (2-3 seconds)
2. Main content (progressive revelation)
3. Summary/Conclusion (emphasis)

# Recommended Timing:
- self.wait(1) for concept absorption
- run_time=2 for important transformations
- run_time=0.5 for quick transitions

RETURN ONLY PYTHON CODE, NO EXPLANATIONS."#;

const PYTHAGOREAN_EXAMPLE: FewShotExample = FewShotExample {
    description: "Show the Pythagorean theorem with a visual proof",
    code: r#"from manim import *

class PythagoreanScene(Scene):
    def construct(self):
        title = Tex("Pythagorean Theorem", font_size=48).to_edge(UP)
        self.play(Write(title))

        A, B, C = [-2, -1, 0], [2, -1, 0], [-2, 2, 0]
        triangle = Polygon(A, B, C, color=BLUE, fill_opacity=0.3)
        self.play(Create(triangle))

        equation = MathTex("a^2", "+", "b^2", "=", "c^2").to_edge(DOWN)
        equation.set_color_by_tex("a^2", RED)
        equation.set_color_by_tex("b^2", GREEN)
        equation.set_color_by_tex("c^2", YELLOW)
        self.play(Write(equation))

        self.wait(2)"#,
};
