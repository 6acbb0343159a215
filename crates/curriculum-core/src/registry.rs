use crate::model::Category;

pub const DEFAULT_TARGET: u32 = 100;

/// Built-in category table, in run order.
pub fn default_categories() -> Vec<Category> {
    vec![
        Category::new(
            "temptation",
            DEFAULT_TARGET,
            &[
                "%tempt%", "%trial%", "%test%", "%resist%", "%overcome%", "%endure%",
                "%strength%", "%deliver%", "%flee%", "%stand%", "%armor%", "%fight%",
                "%struggle%", "%victory%", "%conquer%", "%sin%", "%Spirit%", "%flesh%",
                "%self-control%", "%discipline%", "%guard%", "%watch%", "%alert%", "%sober%",
                "%vigilant%", "%righteous%", "%holy%", "%obey%", "%command%", "%law%",
                "%faithful%", "%steadfast%", "%persever%", "%endure%",
            ],
        ),
        Category::new(
            "fear_anxiety",
            DEFAULT_TARGET,
            &[
                "%fear%", "%afraid%", "%anxiety%", "%anxious%", "%worry%", "%peace%",
                "%trust%", "%faith%", "%courage%", "%comfort%", "%refuge%", "%strength%",
                "%deliver%", "%protect%", "%safety%", "%calm%", "%rest%", "%hope%",
                "%confident%", "%assurance%", "%shield%", "%fortress%", "%rock%", "%shelter%",
                "%help%", "%strong%", "%mighty%", "%power%", "%upholds%", "%sustain%",
            ],
        ),
        Category::new(
            "pride",
            DEFAULT_TARGET,
            &[
                "%pride%", "%proud%", "%humble%", "%humility%", "%arrogant%", "%boast%",
                "%exalt%", "%lowly%", "%meek%", "%modest%", "%conceit%", "%haughty%",
                "%vain%", "%glory%", "%servant%", "%serve%", "%submit%", "%obedient%",
                "%obey%", "%wise%", "%wisdom%", "%foolish%", "%fool%", "%understanding%",
                "%teach%", "%learn%", "%know%", "%knowledge%",
            ],
        ),
        Category::new(
            "lust",
            DEFAULT_TARGET,
            &[
                "%lust%", "%adulter%", "%fornic%", "%sexual%", "%pure%", "%purity%",
                "%chaste%", "%marriage%", "%body%", "%temple%", "%desire%", "%covet%",
                "%eyes%", "%heart%", "%sanctif%", "%holiness%", "%holy%", "%righteous%",
                "%clean%", "%unclean%", "%immoral%", "%sin%", "%flesh%", "%passion%",
                "%control%", "%honor%", "%dishonor%", "%corrupt%",
            ],
        ),
        Category::new(
            "anger",
            DEFAULT_TARGET,
            &[
                "%anger%", "%wrath%", "%rage%", "%furious%", "%patient%", "%patience%",
                "%gentle%", "%kindness%", "%peace%", "%calm%", "%forgive%", "%mercy%",
                "%compassion%", "%grace%", "%temper%", "%bitter%", "%resentment%",
                "%grudge%", "%love%", "%hate%", "%enemy%", "%neighbor%", "%brother%",
                "%quarrel%", "%strife%", "%contention%", "%dispute%",
            ],
        ),
    ]
}
