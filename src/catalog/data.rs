use super::{Layer, Technology};

// Layer order is stack order: first entry is the bottommost layer.
pub(super) static LAYERS: &[Layer] = &[
    Layer {
        id: "infra",
        name: "Infrastructure",
        name_ko: "인프라",
        description: "모든 서비스가 돌아가는 기반 환경",
        subdesc: "서버, 네트워크, 컨테이너 관리",
        accent: 0x4f46e5,
        techs: &[
            Technology {
                name: "AWS",
                desc: "아마존의 클라우드 플랫폼. 가장 널리 쓰이는 인프라 서비스",
                related: &["Docker", "Kubernetes", "S3"],
            },
            Technology {
                name: "GCP",
                desc: "구글 클라우드 플랫폼. AI/ML에 강점",
                related: &["Kubernetes", "TensorFlow", "Kafka"],
            },
            Technology {
                name: "Azure",
                desc: "마이크로소프트 클라우드. 기업 환경에 강점",
                related: &["Docker", "PostgreSQL"],
            },
            Technology {
                name: "Docker",
                desc: "컨테이너 기술. 앱을 어디서나 동일하게 실행",
                related: &["Kubernetes", "Airflow"],
            },
            Technology {
                name: "Kubernetes",
                desc: "컨테이너 오케스트레이션. 대규모 배포 관리",
                related: &["Docker", "Kafka", "Airflow"],
            },
            Technology {
                name: "Linux",
                desc: "서버 운영체제의 표준",
                related: &["AWS", "Docker"],
            },
        ],
    },
    Layer {
        id: "ingestion",
        name: "Ingestion",
        name_ko: "데이터 수집",
        description: "외부 소스에서 데이터를 가져오는 레이어",
        subdesc: "실시간 / 배치 수집",
        accent: 0x0ea5e9,
        techs: &[
            Technology {
                name: "Kafka",
                desc: "대용량 실시간 데이터 스트리밍 플랫폼",
                related: &["Spark", "Airflow", "PostgreSQL"],
            },
            Technology {
                name: "Airflow",
                desc: "데이터 파이프라인 워크플로우 스케줄러",
                related: &["Kafka", "dbt", "Snowflake"],
            },
            Technology {
                name: "Scrapy",
                desc: "Python 기반 웹 크롤링 프레임워크",
                related: &["MongoDB", "Pandas"],
            },
            Technology {
                name: "API 연동",
                desc: "REST/GraphQL API를 통한 외부 데이터 수집",
                related: &["REST API", "MongoDB"],
            },
            Technology {
                name: "Logstash",
                desc: "로그 데이터 수집 및 전처리 도구",
                related: &["Kafka", "Grafana"],
            },
        ],
    },
    Layer {
        id: "storage",
        name: "Storage",
        name_ko: "데이터 저장",
        description: "수집된 데이터를 저장하는 레이어",
        subdesc: "목적에 따라 DB 종류가 달라짐",
        accent: 0x06b6d4,
        techs: &[
            Technology {
                name: "PostgreSQL",
                desc: "관계형 DB의 표준. 복잡한 쿼리에 강점",
                related: &["dbt", "Airflow", "Grafana"],
            },
            Technology {
                name: "MySQL",
                desc: "가장 널리 쓰이는 오픈소스 관계형 DB",
                related: &["Pandas", "dbt"],
            },
            Technology {
                name: "MongoDB",
                desc: "유연한 구조의 NoSQL 문서 DB",
                related: &["Scrapy", "Pandas"],
            },
            Technology {
                name: "Redis",
                desc: "초고속 인메모리 캐시 DB",
                related: &["Kafka", "REST API"],
            },
            Technology {
                name: "Snowflake",
                desc: "클라우드 기반 데이터 웨어하우스",
                related: &["dbt", "Airflow", "Tableau"],
            },
            Technology {
                name: "S3",
                desc: "AWS의 대용량 객체 스토리지",
                related: &["AWS", "Spark", "Airflow"],
            },
        ],
    },
    Layer {
        id: "processing",
        name: "Processing",
        name_ko: "데이터 처리/분석",
        description: "저장된 데이터를 정제하고 분석 가능한 형태로 변환",
        subdesc: "ETL, 집계, 정제",
        accent: 0x10b981,
        techs: &[
            Technology {
                name: "Pandas",
                desc: "Python 데이터 분석의 표준 라이브러리",
                related: &["Scikit-learn", "Streamlit", "PostgreSQL"],
            },
            Technology {
                name: "Spark",
                desc: "대용량 분산 데이터 처리 엔진",
                related: &["Kafka", "S3", "Snowflake"],
            },
            Technology {
                name: "dbt",
                desc: "SQL 기반 데이터 변환 도구",
                related: &["Snowflake", "PostgreSQL", "Airflow"],
            },
            Technology {
                name: "Hadoop",
                desc: "분산 저장 및 처리 프레임워크",
                related: &["Spark", "S3"],
            },
        ],
    },
    Layer {
        id: "serving",
        name: "Serving",
        name_ko: "시각화/서비스",
        description: "분석 결과를 사람이 볼 수 있게 보여주거나 다른 서비스에 제공",
        subdesc: "대시보드, API, 리포트",
        accent: 0xf59e0b,
        techs: &[
            Technology {
                name: "Streamlit",
                desc: "Python으로 빠르게 만드는 데이터 앱",
                related: &["Pandas", "Scikit-learn"],
            },
            Technology {
                name: "Tableau",
                desc: "비개발자도 쓸 수 있는 BI 시각화 도구",
                related: &["Snowflake", "PostgreSQL"],
            },
            Technology {
                name: "Grafana",
                desc: "실시간 모니터링 대시보드",
                related: &["PostgreSQL", "Logstash", "Redis"],
            },
            Technology {
                name: "REST API",
                desc: "HTTP 기반 데이터 제공 인터페이스",
                related: &["API 연동", "Redis", "PostgreSQL"],
            },
            Technology {
                name: "GraphQL",
                desc: "유연한 쿼리 기반 API 표준",
                related: &["REST API", "MongoDB"],
            },
        ],
    },
    Layer {
        id: "aiml",
        name: "AI / ML",
        name_ko: "AI / ML",
        description: "데이터를 기반으로 예측, 추천, 자동화 모델을 만들고 서빙",
        subdesc: "모델 학습, 추론, 배포",
        accent: 0xa855f7,
        techs: &[
            Technology {
                name: "Scikit-learn",
                desc: "Python ML의 시작점. 전통적 ML 알고리즘",
                related: &["Pandas", "Streamlit"],
            },
            Technology {
                name: "TensorFlow",
                desc: "구글의 딥러닝 프레임워크",
                related: &["GCP", "Pandas"],
            },
            Technology {
                name: "PyTorch",
                desc: "Meta의 딥러닝 프레임워크. 연구에 인기",
                related: &["Pandas", "S3"],
            },
            Technology {
                name: "LangChain",
                desc: "LLM 기반 앱 개발 프레임워크",
                related: &["OpenAI API", "MongoDB", "REST API"],
            },
            Technology {
                name: "OpenAI API",
                desc: "GPT 등 OpenAI 모델을 API로 활용",
                related: &["LangChain", "REST API"],
            },
        ],
    },
];
