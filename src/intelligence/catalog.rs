//! Static course, certification and progression tables.

pub type CourseEntry = (&'static str, &'static str);

pub const DS_COURSES: &[CourseEntry] = &[
    ("Machine Learning Crash Course by Google [Free]", "https://developers.google.com/machine-learning/crash-course"),
    ("Machine Learning A-Z by Udemy", "https://www.udemy.com/course/machinelearning/"),
    ("Machine Learning by Andrew NG", "https://www.coursera.org/learn/machine-learning"),
    ("Data Scientist Master Program of Simplilearn (IBM)", "https://www.simplilearn.com/big-data-and-analytics/senior-data-scientist-masters-program-training"),
    ("Data Science Foundations: Fundamentals by LinkedIn", "https://www.linkedin.com/learning/data-science-foundations-fundamentals-5"),
    ("Data Scientist with Python", "https://www.datacamp.com/tracks/data-scientist-with-python"),
    ("Programming for Data Science with Python", "https://www.udacity.com/course/programming-for-data-science-nanodegree--nd104"),
    ("Programming for Data Science with R", "https://www.udacity.com/course/programming-for-data-science-nanodegree-with-R--nd118"),
    ("Introduction to Data Science", "https://www.udacity.com/course/introduction-to-data-science--cd0017"),
    ("Intro to Machine Learning with TensorFlow", "https://www.udacity.com/course/intro-to-machine-learning-with-tensorflow-nanodegree--nd230"),
];

pub const WEB_COURSES: &[CourseEntry] = &[
    ("Django Crash course [Free]", "https://youtu.be/e1IyzVyrLSU"),
    ("Python and Django Full Stack Web Developer Bootcamp", "https://www.udemy.com/course/python-and-django-full-stack-web-developer-bootcamp"),
    ("React Crash Course [Free]", "https://youtu.be/Dorf8i6lCuk"),
    ("ReactJS Project Development Training", "https://www.dotnettricks.com/training/masters-program/reactjs-certification-training"),
    ("Full Stack Web Developer - MEAN Stack", "https://www.simplilearn.com/full-stack-web-developer-mean-stack-certification-training"),
    ("Node.js and Express.js [Free]", "https://youtu.be/Oe421EPjeBE"),
    ("Flask: Develop Web Applications in Python", "https://www.educative.io/courses/flask-develop-web-applications-in-python"),
    ("Full Stack Web Developer by Udacity", "https://www.udacity.com/course/full-stack-web-developer-nanodegree--nd0044"),
    ("Front End Web Developer by Udacity", "https://www.udacity.com/course/front-end-web-developer-nanodegree--nd0011"),
    ("Become a React Developer by Udacity", "https://www.udacity.com/course/react-nanodegree--nd019"),
];

pub const ANDROID_COURSES: &[CourseEntry] = &[
    ("Android Development for Beginners [Free]", "https://youtu.be/fis26HvvDII"),
    ("Android App Development Specialization", "https://www.coursera.org/specializations/android-app-development"),
    ("Associate Android Developer Certification", "https://grow.google/androiddev/#?modal_active=none"),
    ("Become an Android Kotlin Developer by Udacity", "https://www.udacity.com/course/android-kotlin-developer-nanodegree--nd940"),
    ("Android Basics by Google", "https://www.udacity.com/course/android-basics-nanodegree-by-google--nd803"),
    ("The Complete Android Developer Course", "https://www.udemy.com/course/complete-android-n-developer-course/"),
    ("Building an Android App with Architecture Components", "https://www.linkedin.com/learning/building-an-android-app-with-architecture-components"),
    ("Android App Development Masterclass using Kotlin", "https://www.udemy.com/course/android-oreo-kotlin-app-masterclass/"),
];

pub const IOS_COURSES: &[CourseEntry] = &[
    ("IOS App Development by LinkedIn", "https://www.linkedin.com/learning/subscription/topics/ios"),
    ("iOS & Swift - The Complete iOS App Development Bootcamp", "https://www.udemy.com/course/ios-13-app-development-bootcamp/"),
    ("Become an iOS Developer", "https://www.udacity.com/course/ios-developer-nanodegree--nd003"),
    ("iOS App Development with Swift Specialization", "https://www.coursera.org/specializations/app-development"),
    ("Mobile App Development with Swift", "https://www.edx.org/professional-certificate/curtinx-mobile-app-development-with-swift"),
    ("Swift Course by LinkedIn", "https://www.linkedin.com/learning/subscription/topics/swift-2"),
    ("Objective-C Crash Course for Swift Developers", "https://www.udemy.com/course/objectivec/"),
    ("Learn Swift by Codecademy", "https://www.codecademy.com/learn/learn-swift"),
];

pub const UIUX_COURSES: &[CourseEntry] = &[
    ("Google UX Design Professional Certificate", "https://www.coursera.org/professional-certificates/google-ux-design"),
    ("UI / UX Design Specialization", "https://www.coursera.org/specializations/ui-ux-design"),
    ("The Complete App Design Course - UX, UI and Design Thinking", "https://www.udemy.com/course/the-complete-app-design-course-ux-and-ui-design/"),
    ("UX & Web Design Master Course: Strategy, Design, Development", "https://www.udemy.com/course/ux-web-design-master-course-strategy-design-development/"),
    ("DESIGN RULES: Principles + Practices for Great UI Design", "https://www.udemy.com/course/design-rules/"),
    ("Become a UX Designer by Udacity", "https://www.udacity.com/course/ux-designer-nanodegree--nd578"),
    ("Adobe XD Tutorial: User Experience Design Course [Free]", "https://youtu.be/68w2VwalD5w"),
    ("Adobe XD for Beginners [Free]", "https://youtu.be/WEljsc2jorI"),
    ("Figma Crash Course [Free]", "https://youtu.be/jk1T0CdLxwU"),
];

/// Course lookup by field tag; any unmapped field gets the data-science
/// table. Mobile development concatenates both platform tables.
pub fn courses_for_field(field: &str) -> Vec<CourseEntry> {
    match field {
        "data_science" | "ai_ml" => DS_COURSES.to_vec(),
        "web_development" => WEB_COURSES.to_vec(),
        "mobile_development" => {
            let mut courses = ANDROID_COURSES.to_vec();
            courses.extend_from_slice(IOS_COURSES);
            courses
        }
        "android_development" => ANDROID_COURSES.to_vec(),
        "ios_development" => IOS_COURSES.to_vec(),
        "ui_ux_design" => UIUX_COURSES.to_vec(),
        _ => DS_COURSES.to_vec(),
    }
}

/// Candidate titles to target at each level.
pub fn roles_for_level(level: &str) -> &'static [&'static str] {
    match level {
        "entry" => &["Junior Developer", "Associate Analyst", "Trainee"],
        "junior" => &["Mid-level Developer", "Senior Analyst", "Team Lead"],
        "mid" => &["Senior Developer", "Principal Analyst", "Engineering Manager"],
        "senior" => &["Staff Engineer", "Director", "VP of Engineering"],
        "executive" => &["CTO", "Chief Data Officer", "CEO"],
        _ => &[],
    }
}

/// Next rung on the ladder; `executive` has no successor.
pub fn next_level(level: &str) -> Option<&'static str> {
    match level {
        "entry" => Some("junior"),
        "junior" => Some("mid"),
        "mid" => Some("senior"),
        "senior" => Some("executive"),
        _ => None,
    }
}

pub fn certifications_for_field(field: &str) -> &'static [&'static str] {
    match field {
        "data_science" => &[
            "Google Data Analytics Certificate",
            "AWS Certified Machine Learning",
            "Microsoft Azure Data Scientist Associate",
            "Coursera Machine Learning Specialization",
        ],
        "web_development" => &[
            "AWS Certified Developer",
            "Google Cloud Professional Developer",
            "Microsoft Azure Developer Associate",
            "MongoDB Certified Developer",
        ],
        "cloud_computing" => &[
            "AWS Solutions Architect",
            "Azure Solutions Architect Expert",
            "Google Cloud Professional Architect",
            "Kubernetes Certified Administrator",
        ],
        "cybersecurity" => &[
            "CISSP (Certified Information Systems Security Professional)",
            "CEH (Certified Ethical Hacker)",
            "CompTIA Security+",
            "CISM (Certified Information Security Manager)",
        ],
        _ => &[
            "Project Management Professional (PMP)",
            "Agile Certified Practitioner",
            "ITIL Foundation",
            "Six Sigma Green Belt",
        ],
    }
}
