/// Example prompts for demos and smoke-testing the pipeline.
pub fn demo_prompts() -> &'static [&'static str] {
    &[
        "Create a casual outfit for a weekend brunch",
        "I need a formal outfit for a business meeting",
        "Show me a party outfit in black and white",
        "Assemble a work-appropriate outfit under $200",
        "Create a summer casual outfit with blue colors",
        "I'm going to a formal wedding and need to wear a tie",
    ]
}
