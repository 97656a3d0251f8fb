//! Message tables, one per locale. Keys follow `section.name`.

pub(super) type Messages = &'static [(&'static str, &'static str)];

pub(super) static KO: Messages = &[
    ("header.pageTitle", "BMI 계산기"),
    ("inputs.height", "키 (cm)"),
    ("inputs.heightPlaceholder", "cm 단위로 입력"),
    ("inputs.weight", "몸무게 (kg)"),
    ("inputs.weightPlaceholder", "kg 단위로 입력"),
    ("inputs.ageGroup", "연령대 선택"),
    ("inputs.child", "소아/청소년"),
    ("inputs.adult", "성인"),
    ("inputs.senior", "노인(65세 이상)"),
    ("buttons.calculate", "계산하기"),
    ("buttons.reset", "초기화"),
    ("results.title", "결과"),
    ("results.bmi", "BMI"),
    ("results.status", "상태"),
    ("results.childNote", "(소아/청소년 기준)"),
    ("results.seniorNote", "(노인 기준)"),
    ("results.unclassified", "분류 불가"),
    ("results.skipped", "키와 몸무게를 모두 입력하세요"),
    ("batch.skipped", "건너뜀"),
    ("batch.failed", "오류"),
    ("bmiStatus.underweight", "저체중"),
    ("bmiStatus.normal", "정상"),
    ("bmiStatus.overweight", "과체중"),
    ("bmiStatus.obese", "비만"),
    ("bmiStatus.severelyObese", "고도비만"),
    ("infoSection.title", "BMI란 무엇인가요?"),
    (
        "infoSection.description",
        "체질량지수(BMI)는 체중(kg)을 신장(m)의 제곱으로 나눈 값으로, 비만도를 나타내는 지표입니다.",
    ),
    ("infoSection.formula", "계산식: BMI = 체중(kg) / (신장(m) × 신장(m))"),
    ("categories.title", "BMI 범주"),
    ("language.ko", "한국어"),
    ("language.en", "English"),
    ("language.ja", "日本語"),
    ("tips.title", "체중 관리 팁"),
    ("tips.underweight.1", "단백질 섭취를 늘려보세요 (계란, 닭가슴살, 두부 등)"),
    ("tips.underweight.2", "건강한 지방을 포함한 식사를 하세요 (견과류, 아보카도 등)"),
    ("tips.underweight.3", "근력 운동을 통해 근육량을 늘리는 것이 도움됩니다"),
    ("tips.underweight.4", "하루 5-6회 소량으로 나누어 식사하세요"),
    ("tips.normal.1", "현재의 건강한 식습관과 운동 루틴을 유지하세요"),
    ("tips.normal.2", "일주일에 150분 이상의 중간 강도 유산소 운동을 권장합니다"),
    ("tips.normal.3", "다양한 채소와 과일을 포함한 균형 잡힌 식단을 유지하세요"),
    ("tips.normal.4", "정기적인 건강 검진을 통해 체중을 모니터링하세요"),
    ("tips.overweight.1", "당분과 가공식품 섭취를 줄이고 채소와 단백질 위주의 식단을 유지하세요"),
    ("tips.overweight.2", "규칙적인 유산소 운동(걷기, 수영, 자전거 등)을 시작하세요"),
    ("tips.overweight.3", "식사량보다 식사의 질에 집중하세요"),
    ("tips.overweight.4", "충분한 수분 섭취가 도움됩니다"),
    ("tips.obese.1", "전문가(의사, 영양사)의 도움을 받아 체계적인 체중 관리 계획을 세우세요"),
    ("tips.obese.2", "탄수화물 섭취를 줄이고 건강한 단백질과 지방으로 대체하세요"),
    ("tips.obese.3", "매일 30-60분의 운동을 목표로 하세요"),
    ("tips.obese.4", "식사 일지를 작성하면 식습관 개선에 도움이 됩니다"),
    ("tips.severelyObese.1", "반드시 의료 전문가와 상담하여 건강 상태를 체크하세요"),
    ("tips.severelyObese.2", "식이요법과 운동을 병행한 종합적인 접근이 필요합니다"),
    ("tips.severelyObese.3", "심리적 지원과 생활습관 개선에 중점을 두세요"),
    (
        "tips.severelyObese.4",
        "단기간의 급격한 감량보다 장기적이고 지속 가능한 변화를 목표로 하세요",
    ),
    (
        "footer.disclaimer",
        "본 계산기는 정보 제공 목적으로만 사용되며, 의학적 조언을 대체하지 않습니다.",
    ),
];

pub(super) static EN: Messages = &[
    ("header.pageTitle", "BMI Calculator"),
    ("inputs.height", "Height (cm)"),
    ("inputs.heightPlaceholder", "Enter in cm"),
    ("inputs.weight", "Weight (kg)"),
    ("inputs.weightPlaceholder", "Enter in kg"),
    ("inputs.ageGroup", "Age group"),
    ("inputs.child", "Child/Teen"),
    ("inputs.adult", "Adult"),
    ("inputs.senior", "Senior (65+)"),
    ("buttons.calculate", "Calculate"),
    ("buttons.reset", "Reset"),
    ("results.title", "Result"),
    ("results.bmi", "BMI"),
    ("results.status", "Status"),
    ("results.childNote", "(child/teen standard)"),
    ("results.seniorNote", "(senior standard)"),
    ("results.unclassified", "Unclassified"),
    ("results.skipped", "Enter both height and weight"),
    ("batch.skipped", "Skipped"),
    ("batch.failed", "Failed"),
    ("bmiStatus.underweight", "Underweight"),
    ("bmiStatus.normal", "Normal"),
    ("bmiStatus.overweight", "Overweight"),
    ("bmiStatus.obese", "Obese"),
    ("bmiStatus.severelyObese", "Severely obese"),
    ("infoSection.title", "What is BMI?"),
    (
        "infoSection.description",
        "Body Mass Index (BMI) is weight (kg) divided by the square of height (m), an indicator of body fatness.",
    ),
    ("infoSection.formula", "Formula: BMI = weight(kg) / (height(m) × height(m))"),
    ("categories.title", "BMI categories"),
    ("language.ko", "한국어"),
    ("language.en", "English"),
    ("language.ja", "日本語"),
    ("tips.title", "Weight management tips"),
    ("tips.underweight.1", "Eat more protein (eggs, chicken breast, tofu)"),
    ("tips.underweight.2", "Include healthy fats in your meals (nuts, avocado)"),
    ("tips.underweight.3", "Strength training helps build muscle mass"),
    ("tips.underweight.4", "Split your food into 5-6 small meals a day"),
    ("tips.normal.1", "Keep up your current healthy diet and exercise routine"),
    ("tips.normal.2", "Aim for at least 150 minutes of moderate aerobic exercise a week"),
    ("tips.normal.3", "Keep a balanced diet with a variety of vegetables and fruit"),
    ("tips.normal.4", "Monitor your weight with regular health check-ups"),
    ("tips.overweight.1", "Cut down on sugar and processed food, favour vegetables and protein"),
    ("tips.overweight.2", "Start regular aerobic exercise (walking, swimming, cycling)"),
    ("tips.overweight.3", "Focus on the quality of your meals rather than the quantity"),
    ("tips.overweight.4", "Drinking enough water helps"),
    ("tips.obese.1", "Plan your weight management with a doctor or dietitian"),
    ("tips.obese.2", "Reduce carbohydrates and replace them with healthy protein and fat"),
    ("tips.obese.3", "Aim for 30-60 minutes of exercise every day"),
    ("tips.obese.4", "Keeping a food diary helps improve eating habits"),
    ("tips.severelyObese.1", "See a medical professional to check your health"),
    ("tips.severelyObese.2", "A combined approach of diet and exercise is needed"),
    ("tips.severelyObese.3", "Focus on psychological support and lifestyle changes"),
    (
        "tips.severelyObese.4",
        "Aim for long-term, sustainable change rather than rapid weight loss",
    ),
    (
        "footer.disclaimer",
        "This calculator is for information only and does not replace medical advice.",
    ),
];

pub(super) static JA: Messages = &[
    ("header.pageTitle", "BMI計算機"),
    ("inputs.height", "身長 (cm)"),
    ("inputs.heightPlaceholder", "cm単位で入力"),
    ("inputs.weight", "体重 (kg)"),
    ("inputs.weightPlaceholder", "kg単位で入力"),
    ("inputs.ageGroup", "年齢層の選択"),
    ("inputs.child", "小児・青少年"),
    ("inputs.adult", "成人"),
    ("inputs.senior", "高齢者(65歳以上)"),
    ("buttons.calculate", "計算する"),
    ("buttons.reset", "リセット"),
    ("results.title", "結果"),
    ("results.bmi", "BMI"),
    ("results.status", "状態"),
    ("results.childNote", "(小児・青少年基準)"),
    ("results.seniorNote", "(高齢者基準)"),
    ("results.unclassified", "分類不可"),
    ("results.skipped", "身長と体重の両方を入力してください"),
    ("batch.skipped", "スキップ"),
    ("batch.failed", "エラー"),
    ("bmiStatus.underweight", "低体重"),
    ("bmiStatus.normal", "普通体重"),
    ("bmiStatus.overweight", "過体重"),
    ("bmiStatus.obese", "肥満"),
    ("bmiStatus.severelyObese", "高度肥満"),
    ("infoSection.title", "BMIとは?"),
    (
        "infoSection.description",
        "体格指数(BMI)は体重(kg)を身長(m)の二乗で割った値で、肥満度を表す指標です。",
    ),
    ("infoSection.formula", "計算式: BMI = 体重(kg) / (身長(m) × 身長(m))"),
    ("categories.title", "BMI区分"),
    ("language.ko", "한국어"),
    ("language.en", "English"),
    ("language.ja", "日本語"),
    ("tips.title", "体重管理のヒント"),
    ("tips.underweight.1", "タンパク質の摂取を増やしましょう (卵、鶏むね肉、豆腐など)"),
    ("tips.underweight.2", "健康的な脂質を含む食事をとりましょう (ナッツ、アボカドなど)"),
    ("tips.underweight.3", "筋力トレーニングで筋肉量を増やすと効果的です"),
    ("tips.underweight.4", "1日5〜6回に分けて少量ずつ食事をしましょう"),
    ("tips.normal.1", "今の健康的な食習慣と運動習慣を続けましょう"),
    ("tips.normal.2", "週150分以上の中強度の有酸素運動をおすすめします"),
    ("tips.normal.3", "野菜や果物を取り入れたバランスの良い食事を続けましょう"),
    ("tips.normal.4", "定期的な健康診断で体重を確認しましょう"),
    ("tips.overweight.1", "糖分や加工食品を控え、野菜とタンパク質中心の食事にしましょう"),
    ("tips.overweight.2", "規則的な有酸素運動 (ウォーキング、水泳、自転車など) を始めましょう"),
    ("tips.overweight.3", "食事の量より質を意識しましょう"),
    ("tips.overweight.4", "十分な水分補給が役立ちます"),
    ("tips.obese.1", "医師や栄養士の助けを借りて計画的に体重管理をしましょう"),
    ("tips.obese.2", "炭水化物を減らし、健康的なタンパク質と脂質に置き換えましょう"),
    ("tips.obese.3", "毎日30〜60分の運動を目標にしましょう"),
    ("tips.obese.4", "食事日記をつけると食習慣の改善に役立ちます"),
    ("tips.severelyObese.1", "必ず医療専門家に相談し、健康状態を確認しましょう"),
    ("tips.severelyObese.2", "食事療法と運動を組み合わせた総合的な取り組みが必要です"),
    ("tips.severelyObese.3", "心理的なサポートと生活習慣の改善を重視しましょう"),
    (
        "tips.severelyObese.4",
        "短期間の急激な減量より、長期的で持続可能な変化を目指しましょう",
    ),
    (
        "footer.disclaimer",
        "この計算機は情報提供のみを目的としており、医学的助言に代わるものではありません。",
    ),
];
